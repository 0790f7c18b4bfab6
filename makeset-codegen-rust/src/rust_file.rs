//! RustFile abstraction for structured Rust file generation.
//!
//! A file is an optional inner doc comment, a block of `use` statements,
//! and body items separated by blank lines.

use makeset_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Rust use statement for a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Use {
    path: String,
}

impl Use {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn format(&self) -> String {
        format!("use {};", self.path)
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// A structured representation of a Rust file.
///
/// # Example
///
/// ```
/// use makeset_codegen::CodeFragment;
/// use makeset_codegen_rust::{RustFile, Use};
///
/// let file = RustFile::new()
///     .inner_doc("Sets of strings.")
///     .use_stmt(Use::new("std::fmt"))
///     .add(CodeFragment::line("pub struct Set;"))
///     .render();
///
/// assert_eq!(file, "//! Sets of strings.\n\nuse std::fmt;\n\npub struct Set;\n");
/// ```
#[derive(Default)]
pub struct RustFile {
    inner_doc: Option<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module-level `//!` documentation.
    pub fn inner_doc(mut self, doc: impl Into<String>) -> Self {
        self.inner_doc = Some(doc.into());
        self
    }

    /// Add a use statement.
    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add multiple use statements.
    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        self.builder(Indent::RUST).build()
    }

    /// Render into a builder, leaving it open so callers can inspect the
    /// final indentation level.
    pub fn builder(&self, indent: Indent) -> CodeBuilder {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if let Some(doc) = &self.inner_doc {
            builder.apply_fragment(CodeFragment::InnerDoc(doc.clone()));
            sections += 1;
        }

        if !self.uses.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for use_stmt in &self.uses {
                builder.emit(use_stmt);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder
    }

    pub fn is_empty(&self) -> bool {
        self.inner_doc.is_none() && self.uses.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Fn;

    #[test]
    fn test_empty_file() {
        let file = RustFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_uses_then_body() {
        let file = RustFile::new()
            .use_stmt(Use::new("std::fmt"))
            .use_stmt(Use::new("std::hash::Hash"))
            .add(Fn::new("zero").returns("i64").body_line("0"))
            .add(Fn::new("one").returns("i64").body_line("1"));
        assert_eq!(
            file.render(),
            "use std::fmt;\nuse std::hash::Hash;\n\npub fn zero() -> i64 {\n    0\n}\n\npub fn one() -> i64 {\n    1\n}\n"
        );
    }

    #[test]
    fn test_builder_is_balanced() {
        let file = RustFile::new().add(Fn::new("f"));
        assert_eq!(file.builder(Indent::RUST).current_indent(), 0);
    }
}
