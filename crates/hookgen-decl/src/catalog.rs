//! Declaration catalog loading.
//!
//! A catalog is a block of `;`-terminated declarations, one per line. Loading
//! is all-or-nothing: the first malformed or duplicate entry fails the whole
//! catalog, because every generator relies on seeing the same ordered list.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::error::{DeclError, Result};
use crate::signature::Signature;

/// An ordered, duplicate-free list of parsed declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    signatures: Vec<Signature>,
}

impl Catalog {
    /// Parse a catalog from text, preserving declaration order.
    pub fn parse(text: &str, calling_convention: &str) -> Result<Self> {
        let mut signatures = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, declaration) in split_declarations(text).enumerate() {
            let signature = Signature::parse(declaration, calling_convention).map_err(|e| {
                let detail = match e {
                    DeclError::InvalidDeclaration { detail } => detail,
                    other => other.to_string(),
                };
                DeclError::Malformed {
                    index,
                    declaration: declaration.to_string(),
                    detail,
                }
            })?;

            if let Some(&first) = seen.get(signature.name()) {
                return Err(DeclError::DuplicateName {
                    name: signature.name().to_string(),
                    first,
                    index,
                });
            }
            seen.insert(signature.name().to_string(), index);
            signatures.push(signature);
        }

        if signatures.is_empty() {
            return Err(DeclError::EmptyCatalog);
        }

        debug!("parsed {} declarations", signatures.len());
        Ok(Catalog { signatures })
    }

    /// Parse a catalog from a file path.
    pub fn load(path: &Path, calling_convention: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, calling_convention)
    }

    /// Signatures in catalog order.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Look up a declaration by function name.
    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.signatures.iter().find(|s| s.name() == name)
    }
}

/// Split catalog text into individual declarations.
///
/// Entries end at `;`. The usual layout is `;\n`; a `;` followed by other
/// whitespace on the same line also ends an entry. Blank pieces are skipped.
pub fn split_declarations(text: &str) -> impl Iterator<Item = &str> {
    text.split(';').map(str::trim).filter(|d| !d.is_empty())
}
