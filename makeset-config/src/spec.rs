//! The validated element specification.

use std::collections::BTreeSet;

use crate::{ElementConfig, Result, TestValue};

/// Number of values in a test fixture.
pub const FIXTURE_LEN: usize = 10;

/// A named type emitted ahead of the set, bound to the element type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
    /// `= <type>`: a type alias.
    Alias(String),
    /// `{ fields }`: a struct with named fields.
    Struct(String),
    /// `( fields )`: a tuple struct.
    Tuple(String),
}

impl TypeDecl {
    /// Classify the text of a `decl` field. Returns `None` for an
    /// unrecognized form.
    pub fn parse(decl: &str) -> Option<Self> {
        let decl = decl.trim();
        if let Some(target) = decl.strip_prefix('=') {
            let target = target.trim();
            return (!target.is_empty()).then(|| Self::Alias(target.to_string()));
        }
        if let Some(inner) = decl.strip_prefix('{').and_then(|d| d.strip_suffix('}')) {
            return Some(Self::Struct(inner.trim().to_string()));
        }
        if let Some(inner) = decl.strip_prefix('(').and_then(|d| d.strip_suffix(')')) {
            return Some(Self::Tuple(inner.trim().to_string()));
        }
        None
    }
}

/// Validated, immutable description of a set's element type.
///
/// Built with [`ElementConfig::validate`], the parse functions, or
/// [`ElementSpec::builder`]. Import lists are deduplicated and ordered, so the
/// same configuration always produces the same output.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    description: Option<String>,
    package_name: String,
    element_type: String,
    zero_value: String,
    type_decl: Option<TypeDecl>,
    less_body: Option<String>,
    to_string_body: Option<String>,
    imports: BTreeSet<String>,
    test_imports: BTreeSet<String>,
    transforms: bool,
    test_values: Option<[String; FIXTURE_LEN]>,
}

impl ElementSpec {
    /// Start building a specification programmatically.
    pub fn builder(
        package: impl Into<String>,
        element_type: impl Into<String>,
        zero: impl Into<String>,
    ) -> ElementSpecBuilder {
        ElementSpecBuilder {
            config: ElementConfig {
                package: Some(package.into()),
                element_type: Some(element_type.into()),
                zero: Some(zero.into()),
                ..Default::default()
            },
        }
    }

    pub(crate) fn from_parts(parts: SpecParts) -> Self {
        Self {
            description: parts.description,
            package_name: parts.package_name,
            element_type: parts.element_type,
            zero_value: parts.zero_value,
            type_decl: parts.type_decl,
            less_body: parts.less_body,
            to_string_body: parts.to_string_body,
            imports: parts.imports,
            test_imports: parts.test_imports,
            transforms: parts.transforms,
            test_values: parts.test_values,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Name of the generated module.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    /// Expression for the value returned when nothing is found.
    pub fn zero_value(&self) -> &str {
        &self.zero_value
    }

    pub fn type_decl(&self) -> Option<&TypeDecl> {
        self.type_decl.as_ref()
    }

    pub fn less_body(&self) -> Option<&str> {
        self.less_body.as_deref()
    }

    pub fn to_string_body(&self) -> Option<&str> {
        self.to_string_body.as_deref()
    }

    /// Configured implementation imports, ordered.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Configured test imports, ordered.
    pub fn test_imports(&self) -> impl Iterator<Item = &str> {
        self.test_imports.iter().map(String::as_str)
    }

    pub fn has_imports(&self) -> bool {
        !self.imports.is_empty()
    }

    pub fn transforms(&self) -> bool {
        self.transforms
    }

    /// The test fixture, when tests are to be generated.
    pub fn test_values(&self) -> Option<&[String; FIXTURE_LEN]> {
        self.test_values.as_ref()
    }

    /// Whether a test artifact is produced.
    pub fn has_tests(&self) -> bool {
        self.test_values.is_some()
    }

    /// The element type needs `PartialOrd` because no custom order is given.
    pub fn uses_natural_order(&self) -> bool {
        self.less_body.is_none()
    }

    /// The element type needs `Debug` because no custom stringifier is given.
    pub fn uses_debug_string(&self) -> bool {
        self.to_string_body.is_none()
    }
}

/// Field values collected by validation.
pub(crate) struct SpecParts {
    pub description: Option<String>,
    pub package_name: String,
    pub element_type: String,
    pub zero_value: String,
    pub type_decl: Option<TypeDecl>,
    pub less_body: Option<String>,
    pub to_string_body: Option<String>,
    pub imports: BTreeSet<String>,
    pub test_imports: BTreeSet<String>,
    pub transforms: bool,
    pub test_values: Option<[String; FIXTURE_LEN]>,
}

/// Programmatic construction of an [`ElementSpec`].
///
/// The builder fills an [`ElementConfig`] and validates it on
/// [`build`](Self::build), so the same rules apply as for parsed files.
#[derive(Debug, Clone)]
pub struct ElementSpecBuilder {
    config: ElementConfig,
}

impl ElementSpecBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    pub fn decl(mut self, decl: impl Into<String>) -> Self {
        self.config.decl = Some(decl.into());
        self
    }

    pub fn less(mut self, body: impl Into<String>) -> Self {
        self.config.less = Some(body.into());
        self
    }

    pub fn to_string_body(mut self, body: impl Into<String>) -> Self {
        self.config.to_string = Some(body.into());
        self
    }

    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.config.imports.push(path.into());
        self
    }

    pub fn test_import(mut self, path: impl Into<String>) -> Self {
        self.config.test_imports.push(path.into());
        self
    }

    pub fn transforms(mut self, enabled: bool) -> Self {
        self.config.transforms = enabled;
        self
    }

    pub fn test_values<V: Into<TestValue>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.config.test_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and produce the specification.
    pub fn build(self) -> Result<ElementSpec> {
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decl_forms() {
        assert_eq!(
            TypeDecl::parse("= (i32, i32)"),
            Some(TypeDecl::Alias("(i32, i32)".into()))
        );
        assert_eq!(
            TypeDecl::parse("{ pub x: i32, pub y: i32 }"),
            Some(TypeDecl::Struct("pub x: i32, pub y: i32".into()))
        );
        assert_eq!(
            TypeDecl::parse("(pub u8, pub u8)"),
            Some(TypeDecl::Tuple("pub u8, pub u8".into()))
        );
        assert_eq!(TypeDecl::parse("="), None);
        assert_eq!(TypeDecl::parse("struct { x: i32 }"), None);
    }

    #[test]
    fn test_builder_builds_valid_spec() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .import("std::fmt::Write")
            .import("std::fmt::Write")
            .import("std::cmp::Reverse")
            .transforms(true)
            .test_values(0..10_i64)
            .build()
            .unwrap();

        assert_eq!(spec.package_name(), "intset");
        assert_eq!(
            spec.imports().collect::<Vec<_>>(),
            vec!["std::cmp::Reverse", "std::fmt::Write"]
        );
        assert!(spec.transforms());
        assert_eq!(spec.test_values().unwrap()[9], "9");
        assert!(spec.uses_natural_order());
        assert!(spec.uses_debug_string());
    }

    #[test]
    fn test_builder_rejects_short_fixture() {
        let err = ElementSpec::builder("intset", "i64", "0")
            .test_values(0..9_i64)
            .build()
            .unwrap_err();
        assert!(matches!(*err, crate::Error::TestValueCount { count: 9, .. }));
    }
}
