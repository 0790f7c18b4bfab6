use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the configuration text and the name it was read under, so every
/// error can point back into the original document.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a missing field error.
    pub fn missing_field_error(
        &self,
        field: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MissingField {
            src: self.named_source(),
            span,
            field: field.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a wrong fixture size error.
    pub fn test_value_count_error(&self, count: usize, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::TestValueCount {
            src: self.named_source(),
            span,
            count,
        })
    }

    /// Create an unrecognized declaration error.
    pub fn invalid_decl_error(
        &self,
        decl: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidDecl {
            src: self.named_source(),
            span,
            decl: decl.into(),
        })
    }
}

/// Byte offset of a 1-based line and column, as reported by serde_json.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(text.len().saturating_sub(1));
            return Some(offset + col);
        }
        offset += text.len();
    }
    (offset > 0).then(|| offset - 1)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass --config <path>, or pipe the configuration on standard input"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration as JSON")]
    #[diagnostic(code(makeset::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse configuration as TOML")]
    #[diagnostic(code(makeset::parse_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid: missing {field}")]
    #[diagnostic(
        code(makeset::missing_field),
        help("'package', 'type' and 'zero' are required and must not be empty")
    )]
    MissingField {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty value")]
        span: Option<SourceSpan>,
        field: String,
    },

    #[error("wrong number of test values ({count}); exactly 10 are required")]
    #[diagnostic(
        code(makeset::test_value_count),
        help("list ten distinct values in ascending order, or omit 'testValues' to skip tests")
    )]
    TestValueCount {
        #[source_code]
        src: NamedSource<String>,
        #[label("{count} values given")]
        span: Option<SourceSpan>,
        count: usize,
    },

    #[error("unrecognized type declaration '{decl}'")]
    #[diagnostic(
        code(makeset::invalid_decl),
        help("use '= <type>' for an alias, '{{ fields }}' for a struct or '( fields )' for a tuple struct")
    )]
    InvalidDecl {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        decl: String,
    },

    #[error("{message}")]
    #[diagnostic(code(makeset::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Rust reserved keyword")]
    #[diagnostic(help("rename '{name}' to something else, e.g. '{name}set'"))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("{\"a\": 1}", 1, 3), Some(2));
    }

    #[test]
    fn test_offset_of_later_line() {
        let src = "{\n  \"package\": ,\n}";
        // line 2, column 14 is the comma
        assert_eq!(offset_of(src, 2, 14), Some(15));
        assert_eq!(&src[15..16], ",");
    }

    #[test]
    fn test_offset_of_past_end_clamps() {
        assert_eq!(offset_of("{}", 5, 1), Some(1));
        assert_eq!(offset_of("", 1, 1), None);
        assert_eq!(offset_of("{}", 0, 0), None);
    }

    #[test]
    fn test_missing_field_message() {
        let ctx = SourceContext::new("{}", "set.json");
        let err = ctx.missing_field_error("package name", None);
        assert_eq!(err.to_string(), "invalid: missing package name");
    }

    #[test]
    fn test_count_message() {
        let ctx = SourceContext::new("{}", "set.json");
        let err = ctx.test_value_count_error(9, None);
        assert_eq!(
            err.to_string(),
            "wrong number of test values (9); exactly 10 are required"
        );
    }
}
