//! The element type declaration and the per-type helper functions.

use makeset_codegen::Renderable;
use makeset_config::{ElementSpec, TypeDecl};

use super::{Elt, Items};
use crate::ast::{Fn, Param, Struct, TypeAlias};

const DERIVES: &[&str] = &["Clone", "Debug", "PartialEq", "Eq", "Hash"];
const ORDER_DERIVES: &[&str] = &["PartialOrd", "Ord"];

pub(super) fn items(spec: &ElementSpec, elt: Elt<'_>) -> Items {
    let mut items: Items = Vec::new();
    if let Some(decl) = spec.type_decl() {
        tracing::debug!(element = elt.name(), "emitting type declaration");
        items.push(declaration(spec, elt, decl));
    }

    items.push(Box::new(
        Fn::new("zero")
            .doc("The zero value of the element type, returned by searches that find nothing.")
            .returns(elt.name())
            .body(spec.zero_value()),
    ));

    items.push(Box::new(
        Fn::new("is_less")
            .doc("Reports whether `x` orders strictly before `y`.")
            .private()
            .param(Param::new("x", elt.fill("&$T")))
            .param(Param::new("y", elt.fill("&$T")))
            .returns("bool")
            .body(spec.less_body().unwrap_or("x < y")),
    ));

    items.push(Box::new(
        Fn::new("compare")
            .private()
            .param(Param::new("x", elt.fill("&$T")))
            .param(Param::new("y", elt.fill("&$T")))
            .returns("Ordering")
            .body(
                r#"
                if is_less(x, y) {
                    Ordering::Less
                } else if is_less(y, x) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
                "#,
            ),
    ));

    items.push(Box::new(
        Fn::new("element_string")
            .doc("Renders one element for display.")
            .private()
            .param(Param::new("x", elt.fill("&$T")))
            .returns("String")
            .body(spec.to_string_body().unwrap_or("debug_string(x)")),
    ));

    if spec.uses_debug_string() {
        items.push(Box::new(
            Fn::new("debug_string")
                .private()
                .generic("E: Debug + ?Sized")
                .param(Param::new("x", "&E"))
                .returns("String")
                .body_line(r#"format!("{x:?}")"#),
        ));
    }

    items
}

fn declaration(spec: &ElementSpec, elt: Elt<'_>, decl: &TypeDecl) -> Box<dyn Renderable> {
    let doc = "The element type of [`Set`].";
    let derives = || {
        let mut derives = DERIVES.to_vec();
        if spec.uses_natural_order() {
            derives.extend_from_slice(ORDER_DERIVES);
        }
        derives
    };
    match decl {
        TypeDecl::Alias(target) => Box::new(TypeAlias::new(elt.name(), target).doc(doc)),
        TypeDecl::Struct(fields) => Box::new(
            Struct::new(elt.name())
                .doc(doc)
                .derives(derives())
                .raw_fields(fields),
        ),
        TypeDecl::Tuple(fields) => Box::new(
            Struct::new(elt.name())
                .doc(doc)
                .derives(derives())
                .tuple(fields),
        ),
    }
}

#[cfg(test)]
mod tests {
    use makeset_codegen::CodeBuilder;

    use super::*;

    fn render(spec: &ElementSpec) -> String {
        let mut builder = CodeBuilder::rust();
        for item in items(spec, Elt::new(spec)) {
            builder.emit(&item);
        }
        builder.build()
    }

    #[test]
    fn test_natural_order_and_debug_string() {
        let spec = ElementSpec::builder("intset", "i64", "0").build().unwrap();
        let code = render(&spec);
        assert!(code.contains("fn is_less(x: &i64, y: &i64) -> bool {\n    x < y\n}"));
        assert!(code.contains("fn element_string(x: &i64) -> String {\n    debug_string(x)\n}"));
        assert!(code.contains("fn debug_string<E: Debug + ?Sized>(x: &E) -> String {"));
        assert!(!code.contains("struct"));
    }

    #[test]
    fn test_custom_bodies() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .less("x > y")
            .to_string_body("format!(\"#{x}\")")
            .build()
            .unwrap();
        let code = render(&spec);
        assert!(code.contains("    x > y\n"));
        assert!(code.contains("    format!(\"#{x}\")\n"));
        assert!(!code.contains("debug_string"));
    }

    #[test]
    fn test_struct_declaration_derives() {
        let spec = ElementSpec::builder("points", "Point", "Point { x: 0, y: 0 }")
            .decl("{ pub x: i32, pub y: i32 }")
            .build()
            .unwrap();
        insta::assert_snapshot!(render(&spec).lines().take(5).collect::<Vec<_>>().join("\n"), @r"
        /// The element type of [`Set`].
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct Point {
            pub x: i32, pub y: i32
        }
        ");
    }

    #[test]
    fn test_custom_less_drops_order_derives() {
        let spec = ElementSpec::builder("points", "Point", "Point(0, 0)")
            .decl("(pub i32, pub i32)")
            .less("(x.1, x.0) < (y.1, y.0)")
            .build()
            .unwrap();
        let code = render(&spec);
        assert!(code.contains(
            "#[derive(Clone, Debug, PartialEq, Eq, Hash)]\npub struct Point(pub i32, pub i32);"
        ));
    }

    #[test]
    fn test_alias_declaration() {
        let spec = ElementSpec::builder("pairs", "Pair", "(0, 0)")
            .decl("= (i32, i32)")
            .build()
            .unwrap();
        assert!(render(&spec).contains("pub type Pair = (i32, i32);"));
    }
}
