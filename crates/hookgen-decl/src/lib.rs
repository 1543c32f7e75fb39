//! Native API declaration parsing for hookgen.
//!
//! Turns a catalog of single-line C declarations such as
//! `WINGDIAPI void APIENTRY glViewport (GLint x, GLint y, GLsizei width, GLsizei height);`
//! into an ordered list of [`Signature`] values that the code generators consume.
//!
//! ## Modules
//!
//! - [`signature`]: The parsed form of one declaration
//! - [`parse`]: Declaration parser (storage qualifier, calling convention, parameters)
//! - [`catalog`]: Catalog splitting, ordering and duplicate detection
//! - [`builtin`]: Catalogs compiled into the binary

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod parse;
pub mod signature;

// Re-export key types for convenience
pub use catalog::Catalog;
pub use error::DeclError;
pub use parse::DEFAULT_CALLING_CONVENTION;
pub use signature::Signature;
