//! `hookgen.toml` parsing.
//!
//! The file is optional. Every section has defaults that reproduce the
//! built-in opengl32 tracing hooks, so a project only lists what it changes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hookgen_codegen::{GeneratorConfig, OutputLayout};

pub const MANIFEST_FILE: &str = "hookgen.toml";

/// The top-level `hookgen.toml` structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookgenManifest {
    /// Catalog file, relative to the manifest directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Output directory, relative to the manifest directory.
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    /// Generated file names.
    #[serde(default)]
    pub outputs: OutputLayout,
    /// Text substituted into the generated code.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl HookgenManifest {
    /// Load `dir/hookgen.toml` if it exists. Parent directories are not
    /// searched, so a bare run only depends on the working directory.
    pub fn find_and_load(dir: &Path) -> Result<Option<Self>> {
        let candidate = dir.join(MANIFEST_FILE);
        if !candidate.is_file() {
            return Ok(None);
        }
        Self::load(&candidate).map(Some)
    }

    /// Parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse and validate a manifest from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        let manifest: HookgenManifest = toml::from_str(s)?;
        manifest.generator.validate()?;
        manifest.outputs.validate()?;
        Ok(manifest)
    }
}
