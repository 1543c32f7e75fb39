//! Identifier derivation shared by every generator.
//!
//! Each generated file refers to the same three identifiers per entry point.
//! They are only ever produced here, from the function name and a fixed set
//! of prefixes.

use serde::{Deserialize, Serialize};

/// Prefixes applied to a function name to form the generated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingScheme {
    /// Function-pointer typedef, e.g. `PFUNC_glFlush`.
    pub type_alias_prefix: String,
    /// Slot holding the original entry point, e.g. `gOrigin_glFlush`.
    pub slot_prefix: String,
    /// Tracing wrapper, e.g. `openglhelper_glFlush`.
    pub wrapper_prefix: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            type_alias_prefix: "PFUNC_".to_string(),
            slot_prefix: "gOrigin_".to_string(),
            wrapper_prefix: "openglhelper_".to_string(),
        }
    }
}

/// The identifiers generated for one entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifiers {
    pub type_alias: String,
    pub slot: String,
    pub wrapper: String,
}

impl NamingScheme {
    /// Derive the identifiers for the entry point `name`.
    pub fn derive(&self, name: &str) -> Identifiers {
        Identifiers {
            type_alias: format!("{}{name}", self.type_alias_prefix),
            slot: format!("{}{name}", self.slot_prefix),
            wrapper: format!("{}{name}", self.wrapper_prefix),
        }
    }

    /// Prefixes as `(field, value)` pairs, for validation.
    pub(crate) fn prefixes(&self) -> [(&'static str, &str); 3] {
        [
            ("type_alias_prefix", self.type_alias_prefix.as_str()),
            ("slot_prefix", self.slot_prefix.as_str()),
            ("wrapper_prefix", self.wrapper_prefix.as_str()),
        ]
    }
}
