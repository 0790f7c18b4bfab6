//! Errors raised between a validated specification and written files.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::format::Artifact;

/// The specializer produced something it must never produce.
#[derive(Debug, Error, Diagnostic)]
pub enum SpecializeError {
    #[error("the {artifact} closes with {depth} block(s) still open")]
    #[diagnostic(code(makeset::unbalanced_scope))]
    UnbalancedScope { artifact: Artifact, depth: usize },

    #[error("element type '{name}' collides with {with}")]
    #[diagnostic(
        code(makeset::name_collision),
        help("the generated module already uses this name; rename the element type")
    )]
    NameCollision { name: String, with: &'static str },
}

/// Generated text that is not valid Rust.
#[derive(Debug, Error, Diagnostic)]
#[error("generated {artifact} is not valid Rust: {message}")]
#[diagnostic(code(makeset::render_error))]
pub struct RenderError {
    pub artifact: Artifact,
    pub message: String,
    /// The configuration field whose fragment does not parse on its own.
    pub field: Option<&'static str>,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("{message}")]
    pub span: Option<SourceSpan>,
    #[help]
    pub help: Option<String>,
}

impl RenderError {
    pub(crate) fn new(
        artifact: Artifact,
        name: String,
        text: &str,
        error: &syn::Error,
        field: Option<&'static str>,
    ) -> Self {
        let start = error.span().start();
        let offset = byte_offset(text, start.line, start.column);
        Self {
            artifact,
            message: error.to_string(),
            field,
            src: NamedSource::new(name, text.to_string()),
            span: offset.map(|o| SourceSpan::from((o, 1))),
            help: field.map(|f| format!("check the '{f}' field of the configuration")),
        }
    }
}

/// Byte offset of a 1-based line and 0-based character column.
fn byte_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    let mut offset = 0;
    for (i, l) in text.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col = l
                .char_indices()
                .nth(column)
                .map_or(l.trim_end_matches('\n').len(), |(b, _)| b);
            return Some(offset + col);
        }
        offset += l.len();
    }
    None
}

/// Any failure of the configuration-to-text pipeline, tagged with its phase.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("configuration: {0}")]
    #[diagnostic(transparent)]
    Config(Box<makeset_config::Error>),

    #[error("specialization: {0}")]
    #[diagnostic(transparent)]
    Specialize(#[from] SpecializeError),

    #[error("rendering: {0}")]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

impl From<Box<makeset_config::Error>> for GenerateError {
    fn from(error: Box<makeset_config::Error>) -> Self {
        Self::Config(error)
    }
}

impl GenerateError {
    /// The name of the phase that failed.
    pub fn phase(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration",
            Self::Specialize(_) => "specialization",
            Self::Render(_) => "rendering",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset() {
        let text = "fn a() {}\nfn b( {}\n";
        assert_eq!(byte_offset(text, 1, 0), Some(0));
        assert_eq!(byte_offset(text, 2, 5), Some(15));
        assert_eq!(byte_offset(text, 3, 0), None);
    }

    #[test]
    fn test_byte_offset_counts_characters() {
        let text = "let ø = 1;\n";
        assert_eq!(byte_offset(text, 1, 5), Some(6));
    }

    #[test]
    fn test_phase_names() {
        let err = GenerateError::from(SpecializeError::NameCollision {
            name: "Set".to_string(),
            with: "a generated item",
        });
        assert_eq!(err.phase(), "specialization");
        assert_eq!(
            err.to_string(),
            "specialization: element type 'Set' collides with a generated item"
        );
    }

    #[test]
    fn test_render_error_points_at_syntax_error() {
        let text = "pub fn zero() -> i64 {\n    0 +\n}\n";
        let error = syn::parse_file(text).unwrap_err();
        let err = RenderError::new(
            Artifact::Implementation,
            "intset.rs".to_string(),
            text,
            &error,
            Some("zero"),
        );
        assert_eq!(err.field, Some("zero"));
        assert!(err.to_string().starts_with("generated implementation is not valid Rust: "));
        assert_eq!(err.help.as_deref(), Some("check the 'zero' field of the configuration"));
    }
}
