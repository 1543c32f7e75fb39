//! Hand-written declaration parser.
//!
//! Handles the single-line shape used by Windows SDK headers:
//!
//! ```text
//! <storage> <return-type> <calling-convention> <name> (<params>)
//! ```
//!
//! Parameters are split on `", "` and each one is cut into type and name at the
//! later of its last space and its last `*`. This is a heuristic over a fixed
//! format, not a C grammar: function pointers, arrays and nested parentheses
//! are rejected rather than understood.

use crate::error::{DeclError, Result};
use crate::signature::Signature;

/// Calling-convention marker used by the Windows OpenGL headers.
pub const DEFAULT_CALLING_CONVENTION: &str = "APIENTRY";

impl Signature {
    /// Parse one declaration.
    ///
    /// A trailing `;` and surrounding whitespace are ignored.
    ///
    /// Examples:
    /// - `"WINGDIAPI void APIENTRY glFlush (void)"`
    /// - `"WINGDIAPI const GLubyte * APIENTRY glGetString (GLenum name)"`
    pub fn parse(input: &str, calling_convention: &str) -> Result<Self> {
        let input = input.trim().trim_end_matches(';').trim_end();
        if input.is_empty() {
            return Err(invalid("empty declaration"));
        }

        let open = input.find('(').ok_or_else(|| invalid("missing '('"))?;
        let close = input[open..]
            .find(')')
            .map(|pos| open + pos)
            .ok_or_else(|| invalid("missing ')'"))?;

        // Naive first '(' / first ')' pairing; anything else is out of grammar.
        if input[..open].contains(')') || input[close + 1..].contains(&['(', ')'][..]) {
            return Err(invalid("unbalanced parentheses"));
        }
        let trailing = input[close + 1..].trim();
        if !trailing.is_empty() {
            return Err(invalid(format!("unexpected '{trailing}' after parameter list")));
        }

        let (return_type, name) = parse_head(&input[..open], calling_convention)?;
        let parameters = parse_params(&input[open + 1..close])?;

        Ok(Signature::new(return_type, name, parameters))
    }
}

fn invalid(detail: impl Into<String>) -> DeclError {
    DeclError::InvalidDeclaration {
        detail: detail.into(),
    }
}

/// Whether `s` is a C identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse `<storage> <return-type> <conv> <name>` from the part before `(`.
fn parse_head(head: &str, calling_convention: &str) -> Result<(String, String)> {
    let mut tokens = head.split_whitespace();

    // The storage qualifier carries nothing the generators need.
    if tokens.next().is_none() {
        return Err(invalid("missing storage qualifier"));
    }
    let tokens: Vec<&str> = tokens.collect();

    let marker = tokens
        .iter()
        .position(|tok| *tok == calling_convention)
        .ok_or_else(|| invalid(format!("missing calling convention '{calling_convention}'")))?;

    // The name is the last token after the marker; the marker may sit on
    // either side of the return type.
    let after = &tokens[marker + 1..];
    let (name, ret_tail) = match after.split_last() {
        Some((name, rest)) => (*name, rest),
        None => return Err(invalid("missing function name")),
    };
    if !is_identifier(name) {
        return Err(invalid(format!("invalid function name '{name}'")));
    }

    let return_type = tokens[..marker]
        .iter()
        .chain(ret_tail)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if return_type.is_empty() {
        return Err(invalid("missing return type"));
    }

    Ok((return_type, name.to_string()))
}

/// Parse the parameter list between `(` and `)`.
fn parse_params(list: &str) -> Result<Vec<(String, String)>> {
    let list = list.trim();

    // `(void)` and `()` both declare no parameters.
    if list.is_empty() || list == "void" {
        return Ok(Vec::new());
    }

    list.split(", ").map(split_param).collect()
}

/// Split one parameter into `(type, name)`.
///
/// The cut is after the later of the last space and the last `*`, so a
/// trailing `*` stays on the type: `const GLuint *textures` gives
/// `("const GLuint *", "textures")`, `GLenum op` gives `("GLenum ", "op")`.
fn split_param(param: &str) -> Result<(String, String)> {
    if param.contains(',') {
        return Err(invalid(format!(
            "parameters must be separated by \", \" in '{param}'"
        )));
    }

    // `None < Some(_)`, so `max` picks whichever separator comes last.
    let cut = match param.rfind(' ').max(param.rfind('*')) {
        Some(idx) => idx + 1,
        None if param == "void" => {
            return Err(invalid("'void' cannot be combined with other parameters"));
        }
        None => return Err(invalid(format!("parameter '{param}' has no name"))),
    };

    let (ty, name) = param.split_at(cut);
    if ty.trim().is_empty() {
        return Err(invalid(format!("parameter '{param}' has no type")));
    }
    if name.is_empty() {
        return Err(invalid(format!("parameter '{param}' has no name")));
    }
    if !is_identifier(name) {
        return Err(invalid(format!("invalid parameter name '{name}'")));
    }

    Ok((ty.to_string(), name.to_string()))
}
