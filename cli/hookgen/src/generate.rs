//! The generate workflow: load catalog, render artifacts, write them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use hookgen_codegen::{emit_artifacts, EmitReport};
use hookgen_decl::{builtin, Catalog};

use crate::manifest::HookgenManifest;

/// Resolved locations for one run.
pub struct Options {
    /// Catalog file; `None` uses the built-in opengl32 catalog.
    pub catalog: Option<PathBuf>,
    /// Directory the three headers are written to.
    pub out_dir: PathBuf,
}

/// Run the generator.
///
/// The whole catalog is parsed before anything is written, so a malformed
/// declaration leaves existing outputs untouched.
pub fn run(manifest: &HookgenManifest, options: &Options) -> Result<EmitReport> {
    let config = &manifest.generator;
    config.validate()?;
    manifest.outputs.validate()?;

    let catalog = match &options.catalog {
        Some(path) => Catalog::load(path, &config.calling_convention)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::parse(builtin::OPENGL32, &config.calling_convention)
            .with_context(|| format!("parsing built-in {} catalog", builtin::OPENGL32_MODULE))?,
    };
    info!("loaded {} declarations", catalog.len());

    let artifacts = hookgen_codegen::generate(&catalog, config);
    let report = emit_artifacts(&artifacts, &manifest.outputs, &options.out_dir)
        .with_context(|| format!("writing generated code to {}", options.out_dir.display()))?;

    Ok(report)
}
