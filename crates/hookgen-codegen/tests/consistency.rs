//! Cross-artifact consistency over the built-in opengl32 catalog.

use hookgen_codegen::{
    emit_artifacts, generate, ArtifactKind, GeneratorConfig, NamingScheme, OutputLayout,
};
use hookgen_decl::builtin::OPENGL32;
use hookgen_decl::Catalog;

/// Count whole-identifier occurrences of `ident` in `text`.
fn count_identifier(text: &str, ident: &str) -> usize {
    let is_ident_char = |c: char| c.is_ascii_alphanumeric() || c == '_';
    text.match_indices(ident)
        .filter(|(pos, _)| {
            let before = text[..*pos].chars().next_back();
            let after = text[pos + ident.len()..].chars().next();
            !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
        })
        .count()
}

fn opengl32() -> Catalog {
    Catalog::parse(OPENGL32, "APIENTRY").expect("built-in catalog parses")
}

#[test]
fn wrapper_identifier_appears_once_per_artifact() {
    let catalog = opengl32();
    let config = GeneratorConfig::default();
    let set = generate(&catalog, &config);

    for sig in catalog.signatures() {
        let ids = config.naming.derive(sig.name());
        for artifact in set.iter() {
            assert_eq!(
                count_identifier(&artifact.contents, &ids.wrapper),
                1,
                "{} in {}",
                ids.wrapper,
                artifact.kind
            );
        }
    }
}

#[test]
fn slot_and_typedef_usage_is_consistent() {
    let catalog = opengl32();
    let config = GeneratorConfig::default();
    let set = generate(&catalog, &config);

    for sig in catalog.signatures() {
        let ids = config.naming.derive(sig.name());
        // typedef + slot declaration
        assert_eq!(count_identifier(&set.trampolines.contents, &ids.type_alias), 2);
        // slot declaration + forwarding call
        assert_eq!(count_identifier(&set.trampolines.contents, &ids.slot), 2);
        // assignment, test, attach
        assert_eq!(count_identifier(&set.install.contents, &ids.slot), 3);
        assert_eq!(count_identifier(&set.install.contents, &ids.type_alias), 1);
        // test, detach
        assert_eq!(count_identifier(&set.remove.contents, &ids.slot), 2);
        assert_eq!(count_identifier(&set.remove.contents, &ids.type_alias), 0);
    }
}

#[test]
fn wrapper_signature_matches_typedef() {
    let catalog = opengl32();
    let config = GeneratorConfig::default();
    let set = generate(&catalog, &config);

    for sig in catalog.signatures() {
        let ids = config.naming.derive(sig.name());
        let text = &set.trampolines.contents;

        let typedef_prefix = format!("(APIENTRY* {})(", ids.type_alias);
        let typedef_params = text
            .split_once(&typedef_prefix)
            .and_then(|(_, rest)| rest.split_once(");\n"))
            .map(|(params, _)| params)
            .unwrap();

        let wrapper_prefix = format!("APIENTRY {}(", ids.wrapper);
        let wrapper_params = text
            .split_once(&wrapper_prefix)
            .and_then(|(_, rest)| rest.split_once(")\n{"))
            .map(|(params, _)| params)
            .unwrap();

        assert_eq!(typedef_params, wrapper_params, "{}", sig.name());
        let declared = if sig.arity() == 0 {
            0
        } else {
            typedef_params.split(", ").count()
        };
        assert_eq!(declared, sig.arity(), "{}", sig.name());
    }
}

#[test]
fn fragments_are_in_catalog_order() {
    let catalog = opengl32();
    let config = GeneratorConfig::default();
    let set = generate(&catalog, &config);

    for artifact in set.iter() {
        let mut last = 0;
        for sig in catalog.signatures() {
            let wrapper = config.naming.derive(sig.name()).wrapper;
            // Definition in the trampolines, last argument in the hook files.
            let needle = match artifact.kind {
                ArtifactKind::Trampolines => format!("{wrapper}("),
                _ => format!("{wrapper});"),
            };
            let pos = artifact.contents.find(&needle).unwrap();
            assert!(pos >= last, "{} out of order in {}", sig.name(), artifact.kind);
            last = pos;
        }
    }
}

#[test]
fn end_to_end_two_declarations() {
    let catalog = Catalog::parse(
        "WINGDIAPI void APIENTRY glFlush (void); \
         WINGDIAPI void APIENTRY glViewport (GLint x, GLint y, GLsizei width, GLsizei height);",
        "APIENTRY",
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.signatures()[0].arity(), 0);
    assert_eq!(
        catalog.signatures()[1].parameter_names(),
        ["x", "y", "width", "height"]
    );

    let set = generate(&catalog, &GeneratorConfig::default());
    let text = &set.trampolines.contents;

    let flush = text.find("void APIENTRY openglhelper_glFlush()").unwrap();
    let viewport = text
        .find("void APIENTRY openglhelper_glViewport(GLint x, GLint y, GLsizei width, GLsizei height)")
        .unwrap();
    assert!(flush < viewport);

    let flush_trace = text.find("traceAPI(\"glFlush\");\n    gOrigin_glFlush();").unwrap();
    assert!(flush_trace > flush && flush_trace < viewport);
    assert!(text.contains(
        "traceAPI(\"glViewport\");\n    gOrigin_glViewport(x, y, width, height);"
    ));
}

#[test]
fn generation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::default();
    let config = GeneratorConfig::default();

    emit_artifacts(&generate(&opengl32(), &config), &layout, dir.path()).unwrap();
    let first: Vec<Vec<u8>> = [&layout.trampolines, &layout.install, &layout.remove]
        .iter()
        .map(|p| std::fs::read(dir.path().join(p)).unwrap())
        .collect();

    emit_artifacts(&generate(&opengl32(), &config), &layout, dir.path()).unwrap();
    let second: Vec<Vec<u8>> = [&layout.trampolines, &layout.install, &layout.remove]
        .iter()
        .map(|p| std::fs::read(dir.path().join(p)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn custom_naming_flows_into_every_artifact() {
    let config = GeneratorConfig {
        naming: NamingScheme {
            type_alias_prefix: "PFN_".into(),
            slot_prefix: "real_".into(),
            wrapper_prefix: "hooked_".into(),
        },
        ..GeneratorConfig::default()
    };
    let catalog =
        Catalog::parse("WINGDIAPI GLenum APIENTRY glGetError (void);", "APIENTRY").unwrap();
    let set = generate(&catalog, &config);

    assert!(set.trampolines.contents.contains("PFN_glGetError real_glGetError = nullptr;"));
    assert!(set.trampolines.contents.contains("return real_glGetError();"));
    assert!(set
        .install
        .contents
        .contains("if (real_glGetError) DetourAttach(&(PVOID&)real_glGetError, hooked_glGetError);"));
    assert!(set
        .remove
        .contents
        .contains("if (real_glGetError) DetourDetach(&(PVOID&)real_glGetError, hooked_glGetError);"));
}
