//! Turns a validated specification into the text of the generated files.

use makeset_codegen::Indent;
use makeset_config::{ElementConfig, ElementSpec};

use crate::{
    emit,
    error::{GenerateError, SpecializeError},
    format::{Artifact, Formatter},
    imports::{implementation_imports, test_imports},
    rust_file::RustFile,
};

/// Names the generated module declares for itself.
pub const GENERATED_ITEMS: &[&str] = &["Set", "Shape", "Keyer"];

/// Type parameters of generated items. An element type that mentions one is
/// shadowed inside those items.
pub const GENERIC_PARAMS: &[&str] = &["E", "I", "K", "N", "Q", "S", "V"];

/// Prelude names the generated code refers to unqualified.
pub const PRELUDE_NAMES: &[&str] = &[
    "Box",
    "Clone",
    "Copy",
    "Default",
    "Eq",
    "Extend",
    "Fn",
    "FnMut",
    "From",
    "FromIterator",
    "Into",
    "IntoIterator",
    "Iterator",
    "None",
    "Option",
    "Ord",
    "PartialEq",
    "PartialOrd",
    "Sized",
    "Some",
    "String",
    "Vec",
];

/// The generated text for one element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specialization {
    /// Module name, and the stem of both file names.
    pub package: String,
    /// Text of `<package>.rs`.
    pub implementation: String,
    /// Text of `<package>/tests.rs`, when the configuration has test values.
    pub tests: Option<String>,
}

/// Builds the implementation and test artifacts for an [`ElementSpec`].
///
/// The output depends only on the `ElementSpec`, so specializing twice yields
/// identical text.
#[derive(Debug, Clone, Copy)]
pub struct Specializer<'a> {
    spec: &'a ElementSpec,
}

impl<'a> Specializer<'a> {
    pub fn new(spec: &'a ElementSpec) -> Self {
        Self { spec }
    }

    pub fn specialize(&self) -> Result<Specialization, SpecializeError> {
        let spec = self.spec;
        let element_type = spec.element_type();
        if let Some(with) = collision(spec) {
            return Err(SpecializeError::NameCollision {
                name: element_type.to_string(),
                with,
            });
        }

        tracing::debug!(
            package = spec.package_name(),
            element_type,
            transforms = spec.transforms(),
            tests = spec.has_tests(),
            "specializing"
        );
        let implementation = render(Artifact::Implementation, &emit::implementation(spec))?;
        let tests = emit::test_module(spec)
            .map(|file| render(Artifact::Tests, &file))
            .transpose()?;

        Ok(Specialization {
            package: spec.package_name().to_string(),
            implementation,
            tests,
        })
    }
}

/// What the element type would clash with in the generated module, if anything.
fn collision(spec: &ElementSpec) -> Option<&'static str> {
    let element_type = spec.element_type();
    if GENERATED_ITEMS.contains(&element_type) {
        return Some("a generated item");
    }
    if identifiers(element_type).any(|ident| GENERIC_PARAMS.contains(&ident)) {
        return Some("a generic parameter");
    }
    // Without a declaration the name refers to an existing type, which the
    // imports and prelude already agree on.
    spec.type_decl()?;
    if PRELUDE_NAMES.contains(&element_type) {
        return Some("a prelude name");
    }
    let imports = implementation_imports(spec);
    let tests = test_imports(spec);
    imports
        .iter()
        .chain(tests.iter())
        .any(|path| imported_names(path).any(|name| name == element_type))
        .then_some("an imported name")
}

fn identifiers(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| !s.is_empty())
}

/// Names a `use` path brings into scope: the last segment, an `as` alias,
/// or every member of a braced group.
fn imported_names(path: &str) -> impl Iterator<Item = &str> {
    let tail = match path.find('{') {
        Some(open) => &path[open + 1..],
        None => path.rsplit("::").next().unwrap_or(path),
    };
    tail.split(',').filter_map(|item| {
        let item = item.trim().trim_end_matches('}').trim();
        let name = match item.rsplit_once(" as ") {
            Some((_, alias)) => alias.trim(),
            None => item.rsplit("::").next().unwrap_or(item),
        };
        (!name.is_empty() && name != "*" && name != "self").then_some(name)
    })
}

fn render(artifact: Artifact, file: &RustFile) -> Result<String, SpecializeError> {
    let builder = file.builder(Indent::RUST);
    let depth = builder.current_indent();
    if depth != 0 {
        return Err(SpecializeError::UnbalancedScope { artifact, depth });
    }
    Ok(builder.build())
}

/// Specialize and format the artifacts of `spec`.
pub fn specialize_spec(spec: &ElementSpec) -> Result<Specialization, GenerateError> {
    let raw = Specializer::new(spec).specialize()?;
    let formatter = Formatter::new(spec);
    let implementation = formatter.format(Artifact::Implementation, &raw.implementation)?;
    let tests = raw
        .tests
        .map(|text| formatter.format(Artifact::Tests, &text))
        .transpose()?;
    tracing::debug!(package = %raw.package, "formatted artifacts");
    Ok(Specialization {
        package: raw.package,
        implementation,
        tests,
    })
}

/// Validate a raw configuration, then specialize and format it.
pub fn specialize_config(config: &ElementConfig) -> Result<Specialization, GenerateError> {
    let spec = config.validate()?;
    specialize_spec(&spec)
}

#[cfg(test)]
mod tests {
    use makeset_config::TestValue;

    use super::*;

    fn string_spec() -> ElementSpec {
        ElementSpec::builder("stringset", "String", "String::new()")
            .test_values((0..10).map(|i| TestValue::Expr(format!("\"{i}\".to_string()"))))
            .build()
            .unwrap()
    }

    #[test]
    fn test_specialize_is_idempotent() {
        let spec = string_spec();
        let first = Specializer::new(&spec).specialize().unwrap();
        let second = Specializer::new(&spec).specialize().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_implementation_declares_tests_module() {
        let spec = string_spec();
        let out = Specializer::new(&spec).specialize().unwrap();
        assert_eq!(out.package, "stringset");
        assert!(out.implementation.ends_with("#[cfg(test)]\nmod tests;\n"));
        let tests = out.tests.unwrap();
        assert!(tests.starts_with("use super::*;\nuse std::collections::HashMap;\n"));
    }

    #[test]
    fn test_no_test_values_no_tests() {
        let spec = ElementSpec::builder("intset", "i64", "0").build().unwrap();
        let out = Specializer::new(&spec).specialize().unwrap();
        assert!(out.tests.is_none());
        assert!(!out.implementation.contains("mod tests;"));
    }

    #[test]
    fn test_generated_item_name_collides() {
        for name in GENERATED_ITEMS {
            let spec = ElementSpec::builder("things", *name, "0").build().unwrap();
            let err = Specializer::new(&spec).specialize().unwrap_err();
            assert!(matches!(err, SpecializeError::NameCollision { .. }), "{name}");
        }
    }

    fn declared(name: &str) -> ElementSpec {
        ElementSpec::builder("things", name, format!("{name} {{ a: 0 }}"))
            .decl("{ pub a: i32 }")
            .build()
            .unwrap()
    }

    fn collides_with(spec: &ElementSpec) -> Option<&'static str> {
        match Specializer::new(spec).specialize() {
            Err(SpecializeError::NameCollision { with, .. }) => Some(with),
            _ => None,
        }
    }

    #[test]
    fn test_declared_type_collides_with_imports() {
        let names = [
            "Ordering", "Borrow", "Hash", "HashMap", "HashSet", "BTreeMap", "Any", "fmt", "Sub",
        ];
        for name in names {
            assert_eq!(collides_with(&declared(name)), Some("an imported name"), "{name}");
        }
        // Debug is only imported for the fallback stringifier.
        assert_eq!(collides_with(&declared("Debug")), Some("an imported name"));
        let spec = ElementSpec::builder("things", "Debug", "Debug { a: 0 }")
            .decl("{ pub a: i32 }")
            .to_string_body("x.a.to_string()")
            .build()
            .unwrap();
        assert_eq!(collides_with(&spec), None);
    }

    #[test]
    fn test_declared_type_collides_with_configured_imports() {
        let spec = ElementSpec::builder("things", "Cell", "Cell { a: 0 }")
            .decl("{ pub a: i32 }")
            .import("std::cell::{Cell, RefCell}")
            .build()
            .unwrap();
        assert_eq!(collides_with(&spec), Some("an imported name"));

        let spec = ElementSpec::builder("things", "Shared", "Shared { a: 0 }")
            .decl("{ pub a: i32 }")
            .test_import("std::rc::Rc as Shared")
            .build()
            .unwrap();
        assert_eq!(collides_with(&spec), Some("an imported name"));
    }

    #[test]
    fn test_declared_type_collides_with_prelude() {
        for name in ["Vec", "Option", "String", "Box"] {
            assert_eq!(collides_with(&declared(name)), Some("a prelude name"), "{name}");
        }
        // Naming an existing type is fine.
        let spec = ElementSpec::builder("names", "String", "String::new()").build().unwrap();
        assert_eq!(collides_with(&spec), None);
    }

    #[test]
    fn test_element_type_mentioning_generic_parameter_collides() {
        for name in GENERIC_PARAMS {
            assert_eq!(collides_with(&declared(name)), Some("a generic parameter"), "{name}");
        }
        let spec = ElementSpec::builder("things", "Vec<Q>", "Vec::new()").build().unwrap();
        assert!(collides_with(&spec).is_some());
        assert_eq!(collides_with(&declared("Quantity")), None);
    }

    #[test]
    fn test_imported_names() {
        assert_eq!(imported_names("std::cmp::Ordering").collect::<Vec<_>>(), vec!["Ordering"]);
        assert_eq!(imported_names("std::rc::Rc as Shared").collect::<Vec<_>>(), vec!["Shared"]);
        assert_eq!(
            imported_names("std::cell::{self, Cell, RefCell as Ref}").collect::<Vec<_>>(),
            vec!["Cell", "Ref"]
        );
        assert_eq!(imported_names("std::collections::*").count(), 0);
    }

    #[test]
    fn test_transform_gating() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .test_values(0..10_i64)
            .build()
            .unwrap();
        let plain = Specializer::new(&spec).specialize().unwrap();
        assert!(!plain.implementation.contains("pub fn pop("));
        assert!(!plain.tests.unwrap().contains("fn test_choose_and_pop()"));

        let spec = ElementSpec::builder("intset", "i64", "0")
            .transforms(true)
            .test_values(0..10_i64)
            .build()
            .unwrap();
        let full = Specializer::new(&spec).specialize().unwrap();
        assert!(full.implementation.contains("pub fn pop("));
        assert!(full.tests.unwrap().contains("fn test_choose_and_pop()"));
    }

    #[test]
    fn test_specialize_config_reports_phase() {
        let config = ElementConfig {
            package: Some("intset".into()),
            element_type: Some("i64".into()),
            zero: Some("0".into()),
            test_values: (0..9).map(TestValue::Int).collect(),
            ..ElementConfig::default()
        };
        let err = specialize_config(&config).unwrap_err();
        assert_eq!(err.phase(), "configuration");
    }

    #[test]
    fn test_specialize_config_formats_output() {
        let config = ElementConfig {
            package: Some("intset".into()),
            element_type: Some("i64".into()),
            zero: Some("0".into()),
            ..ElementConfig::default()
        };
        let out = specialize_config(&config).unwrap();
        assert!(!out.implementation.contains("\n\n\n"));
        assert!(out.implementation.ends_with("}\n"));
        assert!(syn::parse_file(&out.implementation).is_ok());
    }
}
