//! Syntactic validation and whitespace canonicalization of generated text.

use std::fmt;

use makeset_config::{ElementSpec, TypeDecl};

use crate::error::RenderError;

/// One of the two generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Implementation,
    Tests,
}

impl Artifact {
    /// Path of the artifact relative to the output directory.
    pub fn file_name(&self, package: &str) -> String {
        match self {
            Self::Implementation => format!("{package}.rs"),
            Self::Tests => format!("{package}/tests.rs"),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implementation => f.write_str("implementation"),
            Self::Tests => f.write_str("test module"),
        }
    }
}

/// Checks that an artifact parses as a Rust file and canonicalizes its
/// whitespace.
///
/// When the text does not parse, the configured fragments are parsed one at
/// a time to name the field most likely at fault.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    spec: &'a ElementSpec,
}

impl<'a> Formatter<'a> {
    pub fn new(spec: &'a ElementSpec) -> Self {
        Self { spec }
    }

    pub fn format(&self, artifact: Artifact, text: &str) -> Result<String, RenderError> {
        if let Err(error) = syn::parse_file(text) {
            let field = self.suspect(artifact);
            tracing::debug!(%artifact, ?field, "generated text does not parse");
            return Err(RenderError::new(
                artifact,
                artifact.file_name(self.spec.package_name()),
                text,
                &error,
                field,
            ));
        }
        Ok(canonicalize(text))
    }

    /// The first configured fragment of `artifact` that does not parse in
    /// isolation.
    fn suspect(&self, artifact: Artifact) -> Option<&'static str> {
        let spec = self.spec;
        if syn::parse_str::<syn::Type>(spec.element_type()).is_err() {
            return Some("type");
        }
        match artifact {
            Artifact::Implementation => {
                if syn::parse_str::<syn::Expr>(spec.zero_value()).is_err() {
                    return Some("zero");
                }
                if let Some(decl) = spec.type_decl() {
                    let item = declaration(spec.element_type(), decl);
                    if syn::parse_str::<syn::Item>(&item).is_err() {
                        return Some("decl");
                    }
                }
                if spec.less_body().is_some_and(|b| !parses_as_block(b)) {
                    return Some("less");
                }
                if spec.to_string_body().is_some_and(|b| !parses_as_block(b)) {
                    return Some("toString");
                }
                if spec.imports().any(|i| syn::parse_str::<syn::UseTree>(i).is_err()) {
                    return Some("imports");
                }
            }
            Artifact::Tests => {
                let values = spec.test_values().into_iter().flatten();
                for value in values {
                    if syn::parse_str::<syn::Expr>(value).is_err() {
                        return Some("testValues");
                    }
                }
                if spec
                    .test_imports()
                    .any(|i| syn::parse_str::<syn::UseTree>(i).is_err())
                {
                    return Some("testImports");
                }
            }
        }
        None
    }
}

fn parses_as_block(body: &str) -> bool {
    syn::parse_str::<syn::Block>(&format!("{{\n{body}\n}}")).is_ok()
}

fn declaration(name: &str, decl: &TypeDecl) -> String {
    match decl {
        TypeDecl::Alias(target) => format!("type {name} = {target};"),
        TypeDecl::Struct(fields) => format!("struct {name} {{ {fields} }}"),
        TypeDecl::Tuple(fields) => format!("struct {name}({fields});"),
    }
}

/// Strip trailing whitespace, collapse runs of blank lines, and end with
/// exactly one newline.
pub fn canonicalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_blank = false;
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        let text = "\n\nuse std::fmt;   \n\n\n\npub struct Set;\n\n\n";
        assert_eq!(canonicalize(text), "use std::fmt;\n\npub struct Set;\n");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let once = canonicalize("fn a() {}\n\n\n\nfn b() {}");
        assert_eq!(canonicalize(&once), once);
        assert!(once.ends_with("}\n"));
    }

    #[test]
    fn test_format_valid_text() {
        let spec = ElementSpec::builder("intset", "i64", "0").build().unwrap();
        let out = Formatter::new(&spec)
            .format(Artifact::Implementation, "pub fn zero() -> i64 {   \n    0\n}")
            .unwrap();
        assert_eq!(out, "pub fn zero() -> i64 {\n    0\n}\n");
    }

    #[test]
    fn test_suspect_zero() {
        let spec = ElementSpec::builder("intset", "i64", "0 +").build().unwrap();
        let err = Formatter::new(&spec)
            .format(Artifact::Implementation, "pub fn zero() -> i64 {\n    0 +\n}\n")
            .unwrap_err();
        assert_eq!(err.field, Some("zero"));
        assert_eq!(err.artifact, Artifact::Implementation);
    }

    #[test]
    fn test_suspect_less_body() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .less("x < ")
            .build()
            .unwrap();
        let err = Formatter::new(&spec)
            .format(Artifact::Implementation, "fn is_less() {\n    x <\n}\n")
            .unwrap_err();
        assert_eq!(err.field, Some("less"));
    }

    #[test]
    fn test_suspect_test_value() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .test_values(["0", "1", "2", "3", "4", "5", "6", "7", "8", "(9"])
            .build()
            .unwrap();
        let err = Formatter::new(&spec)
            .format(Artifact::Tests, "fn test_values() {\n    (9\n}\n")
            .unwrap_err();
        assert_eq!(err.field, Some("testValues"));
        assert_eq!(err.src.name(), "intset/tests.rs");
    }

    #[test]
    fn test_artifact_file_names() {
        assert_eq!(Artifact::Implementation.file_name("intset"), "intset.rs");
        assert_eq!(Artifact::Tests.file_name("intset"), "intset/tests.rs");
        assert_eq!(Artifact::Tests.to_string(), "test module");
    }
}
