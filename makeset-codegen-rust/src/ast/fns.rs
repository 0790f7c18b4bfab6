//! Rust function builder.

use makeset_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Rust function.
///
/// A parameter with an empty type renders as its name alone, which is how
/// receivers (`&self`, `&mut self`) are written.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn receiver(receiver: impl Into<String>) -> Self {
        Self::new(receiver, "")
    }

    fn format(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    generics: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    where_clauses: Vec<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            generics: Vec::new(),
            params: Vec::new(),
            return_type: None,
            where_clauses: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the doc comment. Multi-line text becomes several `///` lines.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Add a generic parameter, e.g., `'a` or `Q: ?Sized`.
    pub fn generic(mut self, generic: impl Into<String>) -> Self {
        self.generics.push(generic.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a `where` predicate.
    pub fn where_clause(mut self, predicate: impl Into<String>) -> Self {
        self.where_clauses.push(predicate.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add body content that may span several lines. Leading and trailing
    /// blank lines are dropped and the common leading whitespace is removed
    /// before the body is indented.
    pub fn body(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        let trimmed = content.trim_end().trim_start_matches('\n');
        self.body.push(CodeFragment::lines(trimmed));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");
        match &self.return_type {
            Some(ret) => format!("{vis}fn {}{generics}({params}) -> {ret}", self.name),
            None => format!("{vis}fn {}{generics}({params})", self.name),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::Doc(doc.clone()));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{attr}]")));
        }

        let signature = self.signature();
        let header = if self.where_clauses.is_empty() {
            format!("{signature} {{")
        } else {
            fragments.push(CodeFragment::Line(signature));
            fragments.push(CodeFragment::line("where"));
            fragments.push(CodeFragment::Indent(
                self.where_clauses
                    .iter()
                    .map(|p| CodeFragment::Line(format!("{p},")))
                    .collect(),
            ));
            "{".to_string()
        };

        fragments.push(CodeFragment::braced(header, self.body.clone()));
        fragments
    }
}
