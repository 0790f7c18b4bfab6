//! Rust impl block builder.

use makeset_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    generics: Vec<String>,
    assoc: Vec<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            generics: Vec::new(),
            assoc: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    /// Add a generic parameter to the `impl<...>` header.
    pub fn generic(mut self, generic: impl Into<String>) -> Self {
        self.generics.push(generic.into());
        self
    }

    /// Add an associated item line, e.g., `type Output = Set;`.
    pub fn assoc(mut self, item: impl Into<String>) -> Self {
        self.assoc.push(item.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn format_header(&self) -> String {
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        match &self.trait_name {
            Some(trait_name) => format!("impl{generics} {trait_name} for {} {{", self.type_name),
            None => format!("impl{generics} {} {{", self.type_name),
        }
    }

    fn body_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .assoc
            .iter()
            .map(|item| CodeFragment::Line(item.clone()))
            .collect();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 || !self.assoc.is_empty() {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(method.to_fragments());
        }
        fragments
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            self.format_header(),
            self.body_fragments(),
        )]
    }
}
