//! Integration tests that build generated sets and run their tests.
//!
//! Each test specializes a configuration into a scratch library crate and
//! runs `cargo test` there, which compiles the set module and runs the
//! generated test module alongside any scenario tests written here.

use makeset_codegen::SetCodegen;
use makeset_codegen::testing::{RustTester, ScratchCrate};
use makeset_codegen_rust::Generator;
use makeset_config::{Format, parse_spec};

/// Generate the set for `config` into a scratch crate, add the integration
/// test files in `extra`, and run `cargo test`.
fn assert_generated_set_passes(config: &str, extra: &[(&str, &str)]) {
    let spec = parse_spec(config, Format::Json, "config.json").expect("Failed to parse config");
    let package = spec.package_name().to_string();
    let krate = ScratchCrate::new("scratch").expect("Failed to create scratch crate");

    Generator::new(&spec)
        .generate(&krate.src())
        .expect("Failed to generate set");
    krate
        .write("src/lib.rs", &format!("pub mod {package};\n"))
        .unwrap();
    for (path, content) in extra {
        krate.write(path, content).unwrap();
    }

    if let Err(err) = krate.check(&RustTester) {
        eprintln!("\n=== Generated files ===");
        print_generated_files(&krate.src());
        panic!("Generated set failed to build or test!\n\n{err}");
    }
}

/// Print every generated Rust file for debugging
fn print_generated_files(dir: &std::path::Path) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            print_generated_files(&path);
        } else if path.extension().is_some_and(|e| e == "rs") {
            eprintln!("{}", path.display());
            if let Ok(content) = std::fs::read_to_string(&path) {
                for (i, line) in content.lines().enumerate() {
                    eprintln!("{:>5} | {}", i + 1, line);
                }
            }
        }
    }
}

#[test]
fn test_string_set_passes_its_tests() {
    assert_generated_set_passes(
        r#"{
            "description": "Sets of strings.",
            "package": "stringset",
            "type": "String",
            "zero": "String::new()",
            "testValues": [
                "\"0\".to_string()", "\"1\".to_string()", "\"2\".to_string()",
                "\"3\".to_string()", "\"4\".to_string()", "\"5\".to_string()",
                "\"6\".to_string()", "\"7\".to_string()", "\"8\".to_string()",
                "\"9\".to_string()"
            ]
        }"#,
        &[(
            "tests/scenarios.rs",
            r##"
use std::collections::HashMap;

use scratch::stringset::{Set, Shape, from_keys};

fn set(items: &[&str]) -> Set {
    Set::new(items.iter().map(|s| s.to_string()))
}

#[test]
fn intersect_of_naturals_and_odds() {
    let nat = set(&["0", "1", "2", "3", "4"]);
    let odd = set(&["1", "3", "5", "7", "9"]);
    assert_eq!(nat.intersect(&odd).elements(), vec!["1", "3"]);
}

#[test]
fn union_is_sorted_on_demand() {
    let got = set(&["0", "1", "2"]).union(&set(&["x"]));
    assert_eq!(got.elements(), vec!["0", "1", "2", "x"]);
}

#[test]
fn keys_of_a_map() {
    let map = HashMap::from([
        ("one".to_string(), 1),
        ("two".to_string(), 2),
        ("three".to_string(), 3),
    ]);
    assert_eq!(from_keys(&map).to_string(), r#"{"one", "three", "two"}"#);
    assert!(from_keys(Shape::from_any(&3.5_f64)).is_empty());
}
"##,
        )],
    );
}

#[test]
fn test_int_set_with_transforms_and_custom_string() {
    assert_generated_set_passes(
        r##"{
            "package": "intset",
            "type": "i64",
            "zero": "0",
            "toString": "format!(\"#{x}\")",
            "transforms": true,
            "testValues": [-4, -3, -2, -1, 0, 1, 2, 3, 4, 5]
        }"##,
        &[(
            "tests/scenarios.rs",
            r#"
use scratch::intset::Set;

#[test]
fn display_uses_custom_string() {
    assert_eq!(Set::new([3, -1]).to_string(), "{#-1, #3}");
}

#[test]
fn count_and_partition() {
    let s = Set::new(-4..6);
    assert_eq!(s.count(|e| *e < 0), 4);
    let (neg, rest) = s.partition(|e| *e < 0);
    assert_eq!(neg.elements(), vec![-4, -3, -2, -1]);
    assert_eq!(rest.len(), 6);
}
"#,
        )],
    );
}

#[test]
fn test_string_set_with_transforms_pops_by_predicate() {
    assert_generated_set_passes(
        r#"{
            "package": "words",
            "type": "String",
            "zero": "String::new()",
            "transforms": true
        }"#,
        &[(
            "tests/scenarios.rs",
            r#"
use scratch::words::Set;

#[test]
fn pop_removes_the_match() {
    let mut s = Set::new(["a", "bc", "def", "ghij"].map(String::from));
    let two: &dyn Fn(&String) -> bool = &|e| e.len() == 2;
    assert_eq!(s.pop(Some(two)), ("bc".to_string(), true));
    assert_eq!(s.elements(), vec!["a", "def", "ghij"]);
}
"#,
        )],
    );
}

#[test]
fn test_declared_struct_with_custom_order() {
    assert_generated_set_passes(
        r#"{
            "package": "points",
            "type": "Point",
            "decl": "{ pub x: i32, pub y: i32 }",
            "zero": "Point { x: 0, y: 0 }",
            "less": "(x.x, x.y) < (y.x, y.y)",
            "transforms": true,
            "testValues": [
                "Point { x: 0, y: 0 }", "Point { x: 0, y: 1 }", "Point { x: 0, y: 2 }",
                "Point { x: 1, y: 0 }", "Point { x: 1, y: 1 }", "Point { x: 1, y: 2 }",
                "Point { x: 2, y: 0 }", "Point { x: 2, y: 1 }", "Point { x: 2, y: 2 }",
                "Point { x: 3, y: 0 }"
            ]
        }"#,
        &[],
    );
}

#[test]
fn test_tuple_alias() {
    assert_generated_set_passes(
        r#"{
            "package": "pairs",
            "type": "Pair",
            "decl": "= (u8, char)",
            "zero": "(0, 'a')",
            "testImports": ["std::collections::BTreeSet"],
            "testValues": [
                "(0, 'a')", "(0, 'b')", "(1, 'a')", "(1, 'b')", "(2, 'a')",
                "(2, 'b')", "(3, 'a')", "(3, 'b')", "(4, 'a')", "(4, 'b')"
            ]
        }"#,
        &[(
            "tests/scenarios.rs",
            r#"
use scratch::pairs::{Pair, Set, zero};

#[test]
fn zero_is_the_configured_value() {
    let z: Pair = zero();
    assert_eq!(z, (0, 'a'));
    assert!(!Set::new([z]).is_empty());
}
"#,
        )],
    );
}
