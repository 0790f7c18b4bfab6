//! Import resolution for the generated artifacts.

use makeset_codegen::generation::ImportSet;
use makeset_config::ElementSpec;

use crate::rust_file::Use;

/// Paths the implementation always needs, whatever the configuration.
pub const BASE_IMPORTS: &[&str] = &[
    "std::any::Any",
    "std::borrow::Borrow",
    "std::cmp::Ordering",
    "std::collections::BTreeMap",
    "std::collections::HashMap",
    "std::collections::HashSet",
    "std::fmt",
    "std::hash::BuildHasher",
    "std::hash::Hash",
    "std::ops::BitAnd",
    "std::ops::BitOr",
    "std::ops::BitXor",
    "std::ops::Sub",
];

/// Needed by the fallback element stringifier.
pub const DEBUG_IMPORT: &str = "std::fmt::Debug";

/// Paths the test module always needs besides `super::*`.
pub const BASE_TEST_IMPORTS: &[&str] = &["std::collections::HashMap"];

/// Imports of the implementation artifact: the base set, the configured
/// imports, and `std::fmt::Debug` when no `toString` body is given.
pub fn implementation_imports(spec: &ElementSpec) -> ImportSet {
    let mut imports = ImportSet::from_paths(BASE_IMPORTS.iter().copied());
    imports.extend(spec.imports());
    if spec.uses_debug_string() {
        imports.add(DEBUG_IMPORT);
    }
    tracing::debug!(count = imports.len(), "resolved implementation imports");
    imports
}

/// Imports of the test artifact, not counting the leading `use super::*;`.
pub fn test_imports(spec: &ElementSpec) -> ImportSet {
    let mut imports = ImportSet::from_paths(BASE_TEST_IMPORTS.iter().copied());
    imports.extend(spec.test_imports());
    tracing::debug!(count = imports.len(), "resolved test imports");
    imports
}

pub(crate) fn to_uses(imports: &ImportSet) -> impl Iterator<Item = Use> + '_ {
    imports.iter().map(Use::new)
}
