//! Writing generated artifacts to disk.
//!
//! Every artifact goes to a temporary file next to its target and is renamed
//! over it once complete, so a downstream build never sees a half-written
//! header. Writes are independent: one failure does not stop the others.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{CodegenError, Result, WriteFailure};
use crate::generate::{ArtifactKind, ArtifactSet};

/// File names of the three artifacts, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    pub trampolines: PathBuf,
    pub install: PathBuf,
    pub remove: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            trampolines: PathBuf::from("generate_def_code.h"),
            install: PathBuf::from("generate_hook_code.h"),
            remove: PathBuf::from("generate_unhook_code.h"),
        }
    }
}

impl OutputLayout {
    pub fn path_for(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Trampolines => &self.trampolines,
            ArtifactKind::HookInstall => &self.install,
            ArtifactKind::HookRemove => &self.remove,
        }
    }

    /// Reject layouts where two artifacts would overwrite each other.
    pub fn validate(&self) -> Result<()> {
        for (i, a) in ArtifactKind::ALL.iter().enumerate() {
            let path = self.path_for(*a);
            if path.as_os_str().is_empty() {
                return Err(CodegenError::InvalidConfig {
                    detail: format!("output path for {a} is empty"),
                });
            }
            for b in &ArtifactKind::ALL[i + 1..] {
                if path == self.path_for(*b) {
                    return Err(CodegenError::InvalidConfig {
                        detail: format!(
                            "{a} and {b} share the output path {}",
                            path.display()
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// One successfully written artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Summary of a successful emission.
#[derive(Debug, Clone)]
pub struct EmitReport {
    pub entry_points: usize,
    pub written: Vec<WrittenArtifact>,
}

impl fmt::Display for EmitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generated {} entry points into {} files",
            self.entry_points,
            self.written.len()
        )?;
        for artifact in &self.written {
            write!(
                f,
                "\n  {:<12} {} ({} bytes)",
                artifact.kind.to_string(),
                artifact.path.display(),
                artifact.bytes
            )?;
        }
        Ok(())
    }
}

/// Write all three artifacts under `out_dir`.
///
/// Every write is attempted. If any fails, the error lists each failed path
/// with its cause; targets that failed keep their previous contents.
pub fn emit_artifacts(
    artifacts: &ArtifactSet,
    layout: &OutputLayout,
    out_dir: &Path,
) -> Result<EmitReport> {
    layout.validate()?;

    let mut written = Vec::new();
    let mut failures = Vec::new();

    for artifact in artifacts.iter() {
        let path = out_dir.join(layout.path_for(artifact.kind));
        match write_atomic(&path, artifact.contents.as_bytes()) {
            Ok(()) => {
                info!("wrote {} ({} bytes)", path.display(), artifact.contents.len());
                written.push(WrittenArtifact {
                    kind: artifact.kind,
                    path,
                    bytes: artifact.contents.len(),
                });
            }
            Err(source) => {
                warn!("failed to write {}: {source}", path.display());
                failures.push(WriteFailure { path, source });
            }
        }
    }

    if !failures.is_empty() {
        return Err(CodegenError::WriteFailed(failures));
    }

    Ok(EmitReport {
        entry_points: artifacts.entry_points,
        written,
    })
}

/// Write `contents` to a temporary file beside `path`, then rename it into place.
fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    // The temp file is created owner-only; a rewrite keeps the target's mode.
    let permissions = match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<std::fs::Permissions> {
    None
}
