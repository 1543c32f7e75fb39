//! hookgen: generates call-tracing trampolines and Detours hook code from a
//! native API catalog.

mod generate;
mod manifest;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use manifest::HookgenManifest;

#[derive(Parser)]
#[command(
    name = "hookgen",
    version,
    about = "Generate trampoline, hook-install and hook-remove code from a native API catalog"
)]
struct Cli {
    /// Catalog of `;`-terminated declarations (default: built-in opengl32 catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output directory (default: the config file's directory, else the current one)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Configuration file (default: hookgen.toml in the current directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(report) => eprintln!("{report}"),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<hookgen_codegen::EmitReport> {
    let cwd = std::env::current_dir()?;

    let (manifest, project_dir) = match cli.config {
        Some(path) => {
            let manifest = HookgenManifest::load(&path)?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| cwd.clone());
            (manifest, dir)
        }
        None => (
            HookgenManifest::find_and_load(&cwd)?.unwrap_or_default(),
            cwd.clone(),
        ),
    };

    let options = generate::Options {
        catalog: cli
            .catalog
            .map(|p| cwd.join(p))
            .or_else(|| manifest.catalog.as_ref().map(|p| project_dir.join(p))),
        out_dir: cli
            .out_dir
            .map(|p| cwd.join(p))
            .or_else(|| manifest.out_dir.as_ref().map(|p| project_dir.join(p)))
            .unwrap_or(project_dir),
    };

    generate::run(&manifest, &options)
}
