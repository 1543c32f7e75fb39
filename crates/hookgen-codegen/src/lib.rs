//! Trampoline and hook code generation for hookgen.
//!
//! Takes a parsed [`Catalog`](hookgen_decl::Catalog) and produces three C++
//! fragments that are `#include`d into the interception library:
//!
//! - trampoline definitions (pointer typedef, original-function slot, tracing wrapper)
//! - hook installation (resolve by name, `DetourAttach` when resolved)
//! - hook removal (`DetourDetach` for every resolved entry point)
//!
//! The three files never reference each other; they agree only because every
//! identifier comes from [`naming::NamingScheme::derive`].
//!
//! ## Modules
//!
//! - [`config`]: Generator configuration (`[generator]` in `hookgen.toml`)
//! - [`naming`]: The shared identifier derivation
//! - [`generate`]: The three artifact generators
//! - [`emit`]: Atomic writing of the generated artifacts

pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod naming;

// Re-export key types for convenience
pub use config::GeneratorConfig;
pub use emit::{emit_artifacts, EmitReport, OutputLayout};
pub use error::CodegenError;
pub use generate::{generate, Artifact, ArtifactKind, ArtifactSet};
pub use naming::{Identifiers, NamingScheme};
