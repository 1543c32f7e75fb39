//! Hook installation: resolve each entry point, attach when resolved.

use hookgen_decl::Signature;

use super::{ArtifactGenerator, ArtifactKind};
use crate::config::GeneratorConfig;
use crate::naming::Identifiers;

/// Emits, per entry point:
///
/// ```text
/// gOrigin_f = (PFUNC_f)::GetProcAddress(openglHandle, "f");
/// if (gOrigin_f) DetourAttach(&(PVOID&)gOrigin_f, openglhelper_f);
/// ```
pub struct HookInstallGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> HookInstallGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

impl ArtifactGenerator for HookInstallGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::HookInstall
    }

    fn config(&self) -> &GeneratorConfig {
        self.config
    }

    fn fragment(&self, signature: &Signature, ids: &Identifiers) -> String {
        let cfg = self.config;
        format!(
            "
{slot} = ({alias}){resolve}({module}, \"{name}\");
if ({slot}) {attach}(&(PVOID&){slot}, {wrapper});
",
            slot = ids.slot,
            alias = ids.type_alias,
            wrapper = ids.wrapper,
            resolve = cfg.resolve_function,
            module = cfg.module_handle,
            attach = cfg.attach_function,
            name = signature.name(),
        )
    }
}
