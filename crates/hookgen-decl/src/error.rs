//! Declaration error types.

/// Errors that can occur while loading a declaration catalog.
#[derive(Debug, thiserror::Error)]
pub enum DeclError {
    /// A single declaration could not be split into a signature.
    #[error("invalid declaration: {detail}")]
    InvalidDeclaration { detail: String },

    /// A catalog entry failed to parse; carries its position and text.
    #[error("malformed declaration #{index} `{declaration}`: {detail}")]
    Malformed {
        index: usize,
        declaration: String,
        detail: String,
    },

    /// Two catalog entries declare the same function.
    #[error("duplicate declaration of `{name}` at #{index} (first declared at #{first})")]
    DuplicateName {
        name: String,
        first: usize,
        index: usize,
    },

    /// The catalog holds no declarations at all.
    #[error("catalog contains no declarations")]
    EmptyCatalog,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for declaration operations.
pub type Result<T> = std::result::Result<T, DeclError>;
