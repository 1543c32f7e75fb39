//! The structured form of one native declaration.

/// A parsed native function declaration.
///
/// Parameter types and names are kept as two index-aligned lists. Types keep
/// the text that separated them from the name, so `const GLuint *textures`
/// yields the type `const GLuint *` and `GLenum op` yields `GLenum `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    return_type: String,
    name: String,
    parameter_types: Vec<String>,
    parameter_names: Vec<String>,
}

impl Signature {
    /// Build a signature from `(type, name)` parameter pairs, in declaration order.
    pub fn new(
        return_type: impl Into<String>,
        name: impl Into<String>,
        parameters: Vec<(String, String)>,
    ) -> Self {
        let (parameter_types, parameter_names) = parameters.into_iter().unzip();
        Self {
            return_type: return_type.into(),
            name: name.into(),
            parameter_types,
            parameter_names,
        }
    }

    /// Native return type, e.g. `void` or `const GLubyte *`.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Function identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }

    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    /// `(type, name)` pairs in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameter_types
            .iter()
            .zip(&self.parameter_names)
            .map(|(ty, name)| (ty.as_str(), name.as_str()))
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.parameter_names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_lists_aligned() {
        let sig = Signature::new(
            "void",
            "glBindTexture",
            vec![
                ("GLenum ".to_string(), "target".to_string()),
                ("GLuint ".to_string(), "texture".to_string()),
            ],
        );
        assert_eq!(sig.arity(), 2);
        assert_eq!(sig.parameter_types(), ["GLenum ", "GLuint "]);
        assert_eq!(sig.parameter_names(), ["target", "texture"]);
        let pairs: Vec<_> = sig.parameters().collect();
        assert_eq!(pairs, vec![("GLenum ", "target"), ("GLuint ", "texture")]);
    }

    #[test]
    fn new_without_parameters() {
        let sig = Signature::new("GLenum", "glGetError", Vec::new());
        assert_eq!(sig.return_type(), "GLenum");
        assert_eq!(sig.name(), "glGetError");
        assert_eq!(sig.arity(), 0);
        assert!(sig.parameter_types().is_empty());
    }
}
