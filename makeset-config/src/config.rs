//! The raw configuration record.

use serde::{Deserialize, Serialize};

/// Describes the element type of the set to be generated.
///
/// Every field is optional at the parse level; [`ElementConfig::validate`]
/// reports missing required fields with a pointer into the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ElementConfig {
    /// A human-readable description. Ignored by the generator.
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name of the generated module, e.g. `intset` (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// The element type, e.g. `i64` (required).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,

    /// Expression for the zero value of the element type, e.g. `0` (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,

    /// Declaration bound to `type`: `{ fields }`, `( fields )` or `= <type>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decl: Option<String>,

    /// Body of `fn is_less(x: &T, y: &T) -> bool`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less: Option<String>,

    /// Body of `fn element_string(x: &T) -> String`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_string: Option<String>,

    /// Additional `use` paths for the generated module.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Additional `use` paths for the generated tests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_imports: Vec<String>,

    /// Include map, each, select, filter, partition, choose, pop and count.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub transforms: bool,

    /// Exactly ten ascending values used to generate tests, or none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_values: Vec<TestValue>,
}

/// One entry of `testValues`.
///
/// Strings are Rust expressions and are used verbatim; numbers and booleans
/// are rendered as literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Expr(String),
}

impl TestValue {
    /// The Rust expression this value stands for.
    pub fn to_expr(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            // Debug keeps the fractional part, so `1.0` stays a float literal.
            Self::Float(f) => format!("{f:?}"),
            Self::Expr(s) => s.clone(),
        }
    }
}

impl From<&str> for TestValue {
    fn from(s: &str) -> Self {
        Self::Expr(s.to_string())
    }
}

impl From<i64> for TestValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_json_aliases() {
        let config: ElementConfig = serde_json::from_str(
            r#"{"desc": "ints", "package": "intset", "type": "i64", "zero": "0",
                "toString": "x.to_string()", "testImports": ["std::fmt::Write"]}"#,
        )
        .unwrap();
        assert_eq!(config.description.as_deref(), Some("ints"));
        assert_eq!(config.element_type.as_deref(), Some("i64"));
        assert_eq!(config.to_string.as_deref(), Some("x.to_string()"));
        assert_eq!(config.test_imports, vec!["std::fmt::Write"]);
        assert!(!config.transforms);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<ElementConfig, _> =
            serde_json::from_str(r#"{"package": "s", "colour": "red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_toml() {
        let config: ElementConfig = toml::from_str(
            r#"
package = "intset"
type = "i64"
zero = "0"
transforms = true
testValues = [0, 1, 2]
"#,
        )
        .unwrap();
        assert!(config.transforms);
        assert_eq!(
            config.test_values,
            vec![TestValue::Int(0), TestValue::Int(1), TestValue::Int(2)]
        );
    }

    #[test]
    fn test_value_expressions() {
        assert_eq!(TestValue::Bool(true).to_expr(), "true");
        assert_eq!(TestValue::Int(-3).to_expr(), "-3");
        assert_eq!(TestValue::Float(1.0).to_expr(), "1.0");
        assert_eq!(TestValue::Float(2.5).to_expr(), "2.5");
        assert_eq!(
            TestValue::from("String::from(\"a\")").to_expr(),
            "String::from(\"a\")"
        );
    }

    #[test]
    fn test_serialize_skips_defaults() {
        let config = ElementConfig {
            package: Some("intset".into()),
            element_type: Some("i64".into()),
            zero: Some("0".into()),
            ..Default::default()
        };
        insta::assert_snapshot!(serde_json::to_string(&config).unwrap(), @r#"{"package":"intset","type":"i64","zero":"0"}"#);
    }
}
