//! Strict `{variable}` substitution for stage templates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value bound to `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Undefined variables are an error rather than an empty substitution, so a
//! misspelled binding in a stage template can never leak into a document.

use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not bound.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// Render a template string against an ordered list of bindings.
///
/// Bindings are looked up by exact name after trimming whitespace inside the
/// braces. Values are inserted verbatim; braces inside values are not
/// interpreted.
pub fn render_template(template: &str, bindings: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                let value = lookup(bindings, name).ok_or_else(|| TemplateError::UndefinedVariable {
                    name: name.to_string(),
                    position: pos,
                })?;
                result.push_str(value);
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` passes through.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

fn lookup<'a>(bindings: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    bindings
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}
