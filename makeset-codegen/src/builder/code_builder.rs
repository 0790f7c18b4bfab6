//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builds code with proper indentation. Methods return `&mut Self` so calls
/// can be chained on a mutable builder.
///
/// # Example
///
/// ```
/// use makeset_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder
///     .push_line("fn zero() -> i64 {")
///     .push_indent()
///     .push_line("0")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "fn zero() -> i64 {\n    0\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder with 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add each line of `text` at the current indentation.
    ///
    /// The common leading whitespace of the non-blank lines is removed first,
    /// so hand-written bodies keep their relative layout.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        let margin = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.len() - l.trim_start().len())
            .min()
            .unwrap_or(0);
        for line in text.lines() {
            if line.trim().is_empty() {
                self.push_blank();
            } else {
                let body = line.get(margin..).unwrap_or_else(|| line.trim_start());
                self.push_line(body.trim_end());
            }
        }
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a doc comment with the given marker (`///` or `//!`), one comment
    /// line per line of text.
    pub fn push_doc(&mut self, marker: &str, text: &str) -> &mut Self {
        for line in text.lines() {
            self.write_indent();
            self.buffer.push_str(marker);
            if !line.is_empty() {
                self.buffer.push(' ');
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Lines(s) => {
                self.push_lines(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Doc(text) => {
                self.push_doc("///", &text);
            }
            CodeFragment::InnerDoc(text) => {
                self.push_doc("//!", &text);
            }
        }
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_indentation() {
        let mut builder = CodeBuilder::rust();
        builder
            .push_line("impl Set {")
            .push_indent()
            .push_line("pub fn len(&self) -> usize {")
            .push_indent()
            .push_line("0")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}");
        assert_eq!(
            builder.build(),
            "impl Set {\n    pub fn len(&self) -> usize {\n        0\n    }\n}\n"
        );
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent().push_line("").push_line("x");
        assert_eq!(builder.build(), "\n    x\n");
    }

    #[test]
    fn test_push_lines_reindents_body() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent().push_lines(
            "        if x.0 == y.0 {\n            return x.1 < y.1;\n        }\n\n        x.0 < y.0",
        );
        assert_eq!(
            builder.build(),
            "    if x.0 == y.0 {\n        return x.1 < y.1;\n    }\n\n    x.0 < y.0\n"
        );
    }

    #[test]
    fn test_multiline_doc() {
        let mut builder = CodeBuilder::rust();
        builder
            .push_doc("///", "A set of values.\n\nThe default is empty.")
            .push_line("pub struct Set;");
        assert_eq!(
            builder.build(),
            "/// A set of values.\n///\n/// The default is empty.\npub struct Set;\n"
        );
    }

    #[test]
    fn test_emit_fragments() {
        let mut builder = CodeBuilder::rust();
        builder.emit(&vec![
            CodeFragment::inner_doc("Generated set."),
            CodeFragment::blank(),
            CodeFragment::braced("fn zero() -> i64 {", vec![CodeFragment::lines("0")]),
        ]);
        assert_eq!(
            builder.build(),
            "//! Generated set.\n\nfn zero() -> i64 {\n    0\n}\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::rust();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x\n");
    }
}
