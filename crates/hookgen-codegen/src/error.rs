//! Code generation and emission errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single artifact that could not be written.
#[derive(Debug)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

/// Errors that can occur while configuring, generating or emitting artifacts.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("invalid generator config: {detail}")]
    InvalidConfig { detail: String },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to write {} artifact(s): {}", .0.len(), join_failures(.0))]
    WriteFailed(Vec<WriteFailure>),
}

fn join_failures(failures: &[WriteFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
