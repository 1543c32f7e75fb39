//! The three artifact generators.
//!
//! Each generator maps one [`Signature`] to one self-contained fragment. A
//! file is the banner followed by the fragments of every catalog entry, in
//! catalog order.

mod install;
mod remove;
mod trampoline;

use std::fmt;

use hookgen_decl::{Catalog, Signature};
use log::debug;

use crate::config::GeneratorConfig;
use crate::naming::Identifiers;

pub use self::install::HookInstallGenerator;
pub use self::remove::HookRemoveGenerator;
pub use self::trampoline::TrampolineGenerator;

/// Prefixed once to every generated file.
pub const BANNER: &str = "
/**
 * This file is auto generated, don't modify it
 * */
";

/// Which of the three generated files an artifact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Typedefs, original-function slots and tracing wrappers.
    Trampolines,
    /// Entry point resolution and `DetourAttach` calls.
    HookInstall,
    /// `DetourDetach` calls.
    HookRemove,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Trampolines,
        ArtifactKind::HookInstall,
        ArtifactKind::HookRemove,
    ];
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Trampolines => write!(f, "trampolines"),
            ArtifactKind::HookInstall => write!(f, "hook-install"),
            ArtifactKind::HookRemove => write!(f, "hook-remove"),
        }
    }
}

/// One generated file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub contents: String,
}

/// The three artifacts generated from one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub trampolines: Artifact,
    pub install: Artifact,
    pub remove: Artifact,
    /// Number of entry points in each artifact.
    pub entry_points: usize,
}

impl ArtifactSet {
    /// Artifacts in [`ArtifactKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        [&self.trampolines, &self.install, &self.remove].into_iter()
    }

    pub fn get(&self, kind: ArtifactKind) -> &Artifact {
        match kind {
            ArtifactKind::Trampolines => &self.trampolines,
            ArtifactKind::HookInstall => &self.install,
            ArtifactKind::HookRemove => &self.remove,
        }
    }
}

/// Renders one artifact from an ordered list of signatures.
pub trait ArtifactGenerator {
    fn kind(&self) -> ArtifactKind;

    fn config(&self) -> &GeneratorConfig;

    /// Render the fragment for a single entry point.
    fn fragment(&self, signature: &Signature, ids: &Identifiers) -> String;

    /// Render the whole file: banner, then one fragment per signature.
    fn render(&self, signatures: &[Signature]) -> Artifact {
        let naming = &self.config().naming;
        let contents = signatures.iter().fold(BANNER.to_string(), |mut out, sig| {
            out.push_str(&self.fragment(sig, &naming.derive(sig.name())));
            out
        });
        debug!(
            "rendered {} artifact: {} entry points, {} bytes",
            self.kind(),
            signatures.len(),
            contents.len()
        );
        Artifact {
            kind: self.kind(),
            contents,
        }
    }
}

/// Generate all three artifacts for a catalog.
pub fn generate(catalog: &Catalog, config: &GeneratorConfig) -> ArtifactSet {
    let signatures = catalog.signatures();
    ArtifactSet {
        trampolines: TrampolineGenerator::new(config).render(signatures),
        install: HookInstallGenerator::new(config).render(signatures),
        remove: HookRemoveGenerator::new(config).render(signatures),
        entry_points: signatures.len(),
    }
}
