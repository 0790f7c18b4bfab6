//! Rust struct builder.

use makeset_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }
}

#[derive(Debug, Clone)]
enum Body {
    Named(Vec<Field>),
    /// Field list text written by the user, placed between braces.
    RawNamed(String),
    /// Field list text placed between parentheses.
    Tuple(String),
}

/// Builder for Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    body: Body,
    is_public: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            body: Body::Named(Vec::new()),
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn derives<'a>(mut self, derives: impl IntoIterator<Item = &'a str>) -> Self {
        self.derives.extend(derives.into_iter().map(str::to_string));
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        match &mut self.body {
            Body::Named(fields) => fields.push(field),
            _ => self.body = Body::Named(vec![field]),
        }
        self
    }

    /// Use `fields` verbatim as the braced field list.
    pub fn raw_fields(mut self, fields: impl Into<String>) -> Self {
        self.body = Body::RawNamed(fields.into());
        self
    }

    /// Make this a tuple struct with the given field list.
    pub fn tuple(mut self, fields: impl Into<String>) -> Self {
        self.body = Body::Tuple(fields.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn field_fragments(fields: &[Field]) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for field in fields {
            if let Some(doc) = &field.doc {
                fragments.push(CodeFragment::Doc(doc.clone()));
            }
            let vis = if field.is_public { "pub " } else { "" };
            fragments.push(CodeFragment::Line(format!(
                "{vis}{}: {},",
                field.name, field.ty
            )));
        }
        fragments
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::Doc(doc.clone()));
        }
        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        let header = format!("{vis}struct {}", self.name);
        match &self.body {
            Body::Named(fields) if fields.is_empty() => {
                fragments.push(CodeFragment::Line(format!("{header} {{}}")));
            }
            Body::Named(fields) => {
                fragments.push(CodeFragment::braced(
                    format!("{header} {{"),
                    Self::field_fragments(fields),
                ));
            }
            Body::RawNamed(fields) => {
                fragments.push(CodeFragment::braced(
                    format!("{header} {{"),
                    vec![CodeFragment::Lines(fields.trim().to_string())],
                ));
            }
            Body::Tuple(fields) => {
                fragments.push(CodeFragment::Line(format!("{header}({});", fields.trim())));
            }
        }
        fragments
    }
}
