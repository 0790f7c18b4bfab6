//! Validation of a raw configuration into an [`ElementSpec`].

use std::collections::BTreeSet;

use miette::SourceSpan;

use crate::{
    ElementConfig, ElementSpec, Result,
    error::SourceContext,
    spec::{FIXTURE_LEN, SpecParts, TypeDecl},
};

/// Validation context that carries source information.
///
/// Errors raised through a `ParseContext` point at the offending key in the
/// configuration text.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "stringset.json");
/// ctx.validate_name("stringset", "package", "package")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Span of a configuration key.
    pub fn key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.src(), key)
    }

    /// Span of a value, searched after its key.
    pub fn value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src(), key, value).or_else(|| self.key_span(key))
    }

    /// Validate that a name is a usable Rust identifier.
    pub fn validate_name(&self, name: &str, key: &str, kind: &str) -> Result<()> {
        if is_rust_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                kind,
                self.value_span(key, name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                kind,
                reason,
                self.value_span(key, name),
            ));
        }

        Ok(())
    }

    /// A required, nonempty string field.
    fn required<'c>(&self, value: &'c Option<String>, key: &str, what: &str) -> Result<&'c str> {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(self
                .source
                .missing_field_error(what, self.key_span(key))),
        }
    }

    /// Check every rule and assemble the specification.
    pub fn validate(&self, config: &ElementConfig) -> Result<ElementSpec> {
        let package_name = self.required(&config.package, "package", "package name")?;
        self.validate_name(package_name, "package", "package")?;
        let element_type = self.required(&config.element_type, "type", "type name")?;
        let zero_value = self.required(&config.zero, "zero", "zero value")?;

        let type_decl = match optional(&config.decl) {
            Some(decl) => {
                let parsed = TypeDecl::parse(decl).ok_or_else(|| {
                    self.source
                        .invalid_decl_error(decl, self.value_span("decl", decl))
                })?;
                self.validate_name(element_type, "type", "declared type")?;
                Some(parsed)
            }
            None => None,
        };

        let imports = self.import_set(&config.imports, "imports")?;
        let test_imports = self.import_set(&config.test_imports, "testImports")?;
        let test_values = self.fixture(config)?;

        tracing::debug!(
            package = package_name,
            element = element_type,
            imports = imports.len(),
            tests = test_values.is_some(),
            "validated element configuration"
        );

        Ok(ElementSpec::from_parts(SpecParts {
            description: optional(&config.description).map(str::to_string),
            package_name: package_name.to_string(),
            element_type: element_type.to_string(),
            zero_value: zero_value.to_string(),
            type_decl,
            less_body: optional(&config.less).map(str::to_string),
            to_string_body: optional(&config.to_string).map(str::to_string),
            imports,
            test_imports,
            transforms: config.transforms,
            test_values,
        }))
    }

    fn import_set(&self, paths: &[String], key: &str) -> Result<BTreeSet<String>> {
        let mut set = BTreeSet::new();
        for path in paths {
            let trimmed = path.trim();
            let trimmed = trimmed.strip_prefix("use ").unwrap_or(trimmed).trim();
            let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim();
            if trimmed.is_empty() || trimmed.contains(';') {
                return Err(self.source.validation_error(
                    format!("invalid import path '{path}'"),
                    self.value_span(key, path),
                ));
            }
            set.insert(trimmed.to_string());
        }
        Ok(set)
    }

    fn fixture(&self, config: &ElementConfig) -> Result<Option<[String; FIXTURE_LEN]>> {
        let values = &config.test_values;
        if values.is_empty() {
            return Ok(None);
        }
        if values.len() != FIXTURE_LEN {
            return Err(self
                .source
                .test_value_count_error(values.len(), self.key_span("testValues")));
        }
        let exprs: Vec<String> = values.iter().map(|v| v.to_expr()).collect();
        if let Some(pos) = exprs.iter().position(|e| e.trim().is_empty()) {
            return Err(self.source.validation_error(
                format!("test value {pos} is empty"),
                self.key_span("testValues"),
            ));
        }
        let fixture: [String; FIXTURE_LEN] = exprs.try_into().map_err(|_| {
            self.source
                .test_value_count_error(values.len(), self.key_span("testValues"))
        })?;
        Ok(Some(fixture))
    }
}

/// An optional string field; blank counts as absent.
fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ElementConfig {
    /// Validate a configuration that was not read from text.
    ///
    /// Diagnostics point into the pretty-printed JSON form of the
    /// configuration.
    pub fn validate(&self) -> Result<ElementSpec> {
        let src = serde_json::to_string_pretty(self).unwrap_or_default();
        ParseContext::new(&src, "<config>").validate(self)
    }
}

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
    // Weak keywords
    "union",
];

pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Validate that a name is a plain Rust identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if name == "_" {
        return Some("name cannot be a lone underscore");
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Find the span of a key in JSON (`"key"`) or TOML (`key =`) source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{key}\"");
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, key.len())));
    }

    // TOML bare keys at the start of a line
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        if let Some(after) = rest.strip_prefix(key) {
            if after.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }

    None
}

/// Find the span of a string value after its key.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    let start = find_key_span(src, key)?;
    let after = start.offset() + start.len();
    src[after..]
        .find(value)
        .map(|pos| SourceSpan::from((after + pos, value.len())))
}
