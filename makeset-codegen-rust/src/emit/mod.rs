//! Emission of the implementation and test artifacts.
//!
//! Each submodule contributes the items of one section. Item text is written
//! with `$T` standing for the element type; [`Elt::fill`] substitutes it.

mod algebra;
mod extract;
mod fixture;
mod prelude;
mod properties;
mod set_type;
mod suite;
mod transforms;

use makeset_codegen::{CodeFragment, Renderable};
use makeset_config::ElementSpec;

use crate::{
    imports::{implementation_imports, test_imports, to_uses},
    rust_file::{RustFile, Use},
};

/// A section's items, each separated from the next by a blank line.
pub(crate) type Items = Vec<Box<dyn Renderable>>;

/// The element type as it appears in generated text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Elt<'a>(&'a str);

impl<'a> Elt<'a> {
    pub(crate) fn new(spec: &'a ElementSpec) -> Self {
        Self(spec.element_type())
    }

    pub(crate) fn name(&self) -> &'a str {
        self.0
    }

    /// Replace every `$T` in `text` with the element type.
    pub(crate) fn fill(&self, text: &str) -> String {
        text.replace("$T", self.0)
    }
}

/// Build the implementation artifact.
pub(crate) fn implementation(spec: &ElementSpec) -> RustFile {
    let elt = Elt::new(spec);
    let mut items: Items = Vec::new();
    items.extend(prelude::items(spec, elt));
    items.extend(set_type::items(elt));
    items.extend(algebra::items(elt));
    if spec.transforms() {
        tracing::debug!("emitting transforms");
        items.extend(transforms::items(elt));
    }
    items.extend(extract::items(elt));
    if spec.has_tests() {
        items.push(Box::new(vec![
            CodeFragment::line("#[cfg(test)]"),
            CodeFragment::line("mod tests;"),
        ]));
    }

    let imports = implementation_imports(spec);
    RustFile::new()
        .inner_doc(module_doc(spec))
        .use_stmts(to_uses(&imports))
        .add_all(items)
}

/// Build the test artifact, if the configuration has test values.
pub(crate) fn test_module(spec: &ElementSpec) -> Option<RustFile> {
    let values = spec.test_values()?;
    let elt = Elt::new(spec);
    let mut items: Items = Vec::new();
    items.extend(fixture::items(elt, values, spec.transforms()));
    items.extend(suite::items(elt));
    if spec.transforms() {
        tracing::debug!("emitting transform tests");
        items.extend(suite::transform_items(elt));
    }
    items.extend(properties::items(elt));

    let imports = test_imports(spec);
    Some(
        RustFile::new()
            .use_stmt(Use::new("super::*"))
            .use_stmts(to_uses(&imports))
            .add_all(items),
    )
}

fn module_doc(spec: &ElementSpec) -> String {
    let mut doc = String::new();
    if let Some(description) = spec.description() {
        doc.push_str(description.trim());
        doc.push_str("\n\n");
    }
    doc.push_str(&format!(
        "A set of `{}` values.\n\n\
         [`Set`] is a finite collection of distinct elements backed by a hash set.\n\
         `Set::default()` is a valid empty set that holds no storage until an\n\
         element is added. `union`, `intersect`, `diff`, `sym_diff` and `clone`\n\
         return new sets. `add`, `update`, `discard` and `remove` modify the\n\
         receiver in place and report whether its membership changed.",
        spec.element_type()
    ));
    doc
}
