//! Import collection.

use std::collections::BTreeSet;

/// A deduplicated, lexicographically ordered set of import paths.
///
/// Ordering is by the full path text, so repeated generation from the same
/// inputs yields identical import blocks regardless of insertion order.
///
/// # Example
///
/// ```
/// use makeset_codegen::generation::ImportSet;
///
/// let mut imports = ImportSet::from_paths(["std::fmt", "std::any::Any"]);
/// imports.add("std::fmt");
/// assert_eq!(imports.iter().collect::<Vec<_>>(), ["std::any::Any", "std::fmt"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    paths: BTreeSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed set of paths.
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        set.extend(paths);
        set
    }

    /// Add a path; returns whether it was new.
    pub fn add(&mut self, path: &str) -> bool {
        self.paths.insert(path.to_string())
    }

    pub fn extend<'a>(&mut self, paths: impl IntoIterator<Item = &'a str>) {
        for path in paths {
            self.add(path);
        }
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: &ImportSet) {
        self.paths.extend(other.paths.iter().cloned());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over the paths in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_order() {
        let mut imports = ImportSet::new();
        assert!(imports.add("std::fmt"));
        assert!(imports.add("std::cmp::Ordering"));
        assert!(!imports.add("std::fmt"));
        assert_eq!(
            imports.iter().collect::<Vec<_>>(),
            vec!["std::cmp::Ordering", "std::fmt"]
        );
    }

    #[test]
    fn test_order_is_independent_of_insertion() {
        let a = ImportSet::from_paths(["b::c", "a::z", "a::b"]);
        let b = ImportSet::from_paths(["a::b", "b::c", "a::z"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge() {
        let mut base = ImportSet::from_paths(["std::fmt"]);
        base.merge(&ImportSet::from_paths(["std::fmt", "std::fmt::Debug"]));
        assert_eq!(base.len(), 2);
        assert!(base.contains("std::fmt::Debug"));
    }
}
