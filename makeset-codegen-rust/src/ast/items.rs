//! Type aliases, traits, and enums.

use makeset_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `type Name = Target;`.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    target: String,
    doc: Option<String>,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::Doc(doc.clone()));
        }
        fragments.push(CodeFragment::Line(format!(
            "pub type {} = {};",
            self.name, self.target
        )));
        fragments
    }
}

/// Builder for a trait made of required methods.
#[derive(Debug, Clone)]
pub struct Trait {
    name: String,
    doc: Option<String>,
    methods: Vec<(Option<String>, String)>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a required method by its signature, e.g., `fn keys(&self) -> Vec<i64>`.
    pub fn method(mut self, doc: Option<&str>, signature: impl Into<String>) -> Self {
        self.methods.push((doc.map(str::to_string), signature.into()));
        self
    }
}

impl Renderable for Trait {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::Doc(doc.clone()));
        }
        let mut body = Vec::new();
        for (doc, signature) in &self.methods {
            if let Some(doc) = doc {
                body.push(CodeFragment::Doc(doc.clone()));
            }
            body.push(CodeFragment::Line(format!("{signature};")));
        }
        fragments.push(CodeFragment::braced(
            format!("pub trait {} {{", self.name),
            body,
        ));
        fragments
    }
}

/// A variant in a Rust enum.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub doc: Option<String>,
    pub data: Option<String>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            data: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set tuple data for the variant, e.g., `Single(i64)`.
    pub fn tuple(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// Builder for Rust enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    variants: Vec<Variant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::Doc(doc.clone()));
        }
        let body = self
            .variants
            .iter()
            .flat_map(|v| {
                let mut lines = Vec::new();
                if let Some(doc) = &v.doc {
                    lines.push(CodeFragment::Doc(doc.clone()));
                }
                lines.push(CodeFragment::Line(match &v.data {
                    Some(data) => format!("{}({}),", v.name, data),
                    None => format!("{},", v.name),
                }));
                lines
            })
            .collect();
        fragments.push(CodeFragment::braced(
            format!("pub enum {} {{", self.name),
            body,
        ));
        fragments
    }
}
