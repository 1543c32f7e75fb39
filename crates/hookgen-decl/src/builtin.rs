//! Catalogs compiled into the binary.

/// The OpenGL 1.1 entry points exported by `opengl32.dll`.
pub const OPENGL32: &str = include_str!("../catalog/opengl32.txt");

/// Module the [`OPENGL32`] entry points are resolved from.
pub const OPENGL32_MODULE: &str = "opengl32.dll";
