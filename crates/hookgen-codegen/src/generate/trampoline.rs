//! Trampoline definitions: pointer typedef, original slot, tracing wrapper.

use hookgen_decl::Signature;

use super::{ArtifactGenerator, ArtifactKind};
use crate::config::GeneratorConfig;
use crate::naming::Identifiers;

/// Emits, per entry point:
///
/// ```text
/// typedef R (APIENTRY* PFUNC_f)(T0 a, T1 b);
/// PFUNC_f gOrigin_f = nullptr;
/// R APIENTRY openglhelper_f(T0 a, T1 b)
/// {
///     OpenGLHelper::Instance()->traceAPI("f");
///     return gOrigin_f(a, b);
/// }
/// ```
pub struct TrampolineGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> TrampolineGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

impl ArtifactGenerator for TrampolineGenerator<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Trampolines
    }

    fn config(&self) -> &GeneratorConfig {
        self.config
    }

    fn fragment(&self, signature: &Signature, ids: &Identifiers) -> String {
        let cfg = self.config;
        let ret = signature.return_type();
        let conv = &cfg.calling_convention;
        let params = declared_parameters(signature);
        let args = signature.parameter_names().join(", ");
        let forward = if ret == "void" { "" } else { "return " };

        format!(
            "
typedef {ret} ({conv}* {alias})({params});
{alias} {slot} = {null};
{ret} {conv} {wrapper}({params})
{{
    {trace}(\"{name}\");
    {forward}{slot}({args});
}}
",
            alias = ids.type_alias,
            slot = ids.slot,
            wrapper = ids.wrapper,
            null = cfg.null_sentinel,
            trace = cfg.trace_function,
            name = signature.name(),
        )
    }
}

/// `T0 a, T1 b`, in declaration order.
///
/// Parsed types keep their trailing separator (`GLenum `, `const GLuint *`)
/// and are glued straight onto the name; other types get one space.
fn declared_parameters(signature: &Signature) -> String {
    signature
        .parameters()
        .map(|(ty, name)| {
            if ty.ends_with(&[' ', '*'][..]) {
                format!("{ty}{name}")
            } else {
                format!("{ty} {name}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
