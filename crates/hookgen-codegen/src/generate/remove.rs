//! Hook removal: detach every entry point that was resolved.

use hookgen_decl::Signature;

use super::{ArtifactGenerator, ArtifactKind};
use crate::config::GeneratorConfig;
use crate::naming::Identifiers;

/// Emits, per entry point:
///
/// ```text
/// if (gOrigin_f) DetourDetach(&(PVOID&)gOrigin_f, openglhelper_f);
/// ```
pub struct HookRemoveGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> HookRemoveGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

impl ArtifactGenerator for HookRemoveGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::HookRemove
    }

    fn config(&self) -> &GeneratorConfig {
        self.config
    }

    fn fragment(&self, _signature: &Signature, ids: &Identifiers) -> String {
        format!(
            "\nif ({slot}) {detach}(&(PVOID&){slot}, {wrapper});\n",
            slot = ids.slot,
            wrapper = ids.wrapper,
            detach = self.config.detach_function,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detach_when_resolved() {
        let config = GeneratorConfig::default();
        let sig = Signature::new("void", "glEnd", Vec::new());
        let ids = config.naming.derive(sig.name());
        assert_eq!(
            HookRemoveGenerator::new(&config).fragment(&sig, &ids),
            "\nif (gOrigin_glEnd) DetourDetach(&(PVOID&)gOrigin_glEnd, openglhelper_glEnd);\n"
        );
    }
}
