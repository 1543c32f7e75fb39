//! Generator configuration.
//!
//! Every field has a default, and the defaults generate the `opengl32.dll`
//! tracing hooks used by `OpenGLHelper`. A `[generator]` table in
//! `hookgen.toml` overrides individual fields.

use hookgen_decl::parse::is_identifier;
use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};
use crate::naming::NamingScheme;

/// Text substituted into the generated C++ fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Calling-convention marker, both parsed from declarations and emitted.
    pub calling_convention: String,
    /// Prefixes for the per-entry-point identifiers.
    pub naming: NamingScheme,
    /// Initial value of each original-function slot.
    pub null_sentinel: String,
    /// Called with the entry point name before forwarding.
    pub trace_function: String,
    /// Variable holding the module handle in the install context.
    pub module_handle: String,
    /// Resolves an entry point by name from `module_handle`.
    pub resolve_function: String,
    /// Installs an interception: `attach(&(PVOID&)slot, wrapper)`.
    pub attach_function: String,
    /// Removes an interception: `detach(&(PVOID&)slot, wrapper)`.
    pub detach_function: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            calling_convention: hookgen_decl::DEFAULT_CALLING_CONVENTION.to_string(),
            naming: NamingScheme::default(),
            null_sentinel: "nullptr".to_string(),
            trace_function: "OpenGLHelper::Instance()->traceAPI".to_string(),
            module_handle: "openglHandle".to_string(),
            resolve_function: "::GetProcAddress".to_string(),
            attach_function: "DetourAttach".to_string(),
            detach_function: "DetourDetach".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from a TOML string and validate it.
    pub fn parse(input: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value can be pasted into C++ source.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.calling_convention) {
            return Err(invalid(format!(
                "calling_convention '{}' is not an identifier",
                self.calling_convention
            )));
        }

        for (field, prefix) in self.naming.prefixes() {
            if prefix.is_empty() || !is_identifier(prefix) {
                return Err(invalid(format!(
                    "naming.{field} '{prefix}' is not an identifier prefix"
                )));
            }
        }

        let required = [
            ("null_sentinel", &self.null_sentinel),
            ("trace_function", &self.trace_function),
            ("module_handle", &self.module_handle),
            ("resolve_function", &self.resolve_function),
            ("attach_function", &self.attach_function),
            ("detach_function", &self.detach_function),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(invalid(format!("{field} must not be empty")));
            }
        }

        Ok(())
    }
}

fn invalid(detail: String) -> CodegenError {
    CodegenError::InvalidConfig { detail }
}
