//! Helpers shared by the generated tests.

use makeset_codegen::CodeFragment;
use makeset_config::FIXTURE_LEN;

use super::{Elt, Items};
use crate::ast::{Fn, Impl, Param, Struct};

pub(super) fn items(elt: Elt<'_>, values: &[String; FIXTURE_LEN], transforms: bool) -> Items {
    let mut fixture = vec![CodeFragment::line("[")];
    fixture.push(CodeFragment::Indent(
        values
            .iter()
            .map(|v| CodeFragment::Lines(format!("{},", v.trim())))
            .collect(),
    ));
    fixture.push(CodeFragment::line("]"));

    let mut items: Items = vec![
        Box::new(vec![
            CodeFragment::doc("The fixture, in ascending order."),
            CodeFragment::braced(elt.fill(&format!("fn test_values() -> [$T; {FIXTURE_LEN}] {{")), fixture),
        ]),
        Box::new(
            Fn::new("test_keys")
                .private()
                .param(Param::new("ixs", "&[usize]"))
                .returns(elt.fill("Vec<$T>"))
                .body(
                    r#"
                    let values = test_values();
                    ixs.iter().map(|&i| values[i].clone()).collect()
                    "#,
                ),
        ),
        Box::new(
            Fn::new("test_set")
                .private()
                .param(Param::new("ixs", "&[usize]"))
                .returns("Set")
                .body_line("Set::new(test_keys(ixs))"),
        ),
        Box::new(
            Fn::new("key_pos")
                .private()
                .param(Param::new("key", elt.fill("&$T")))
                .returns("Option<usize>")
                .body_line("test_values().iter().position(|v| v == key)"),
        ),
        Box::new(
            Fn::new("show")
                .private()
                .param(Param::new("values", elt.fill("&[$T]")))
                .returns("String")
                .body_line(r#"values.iter().map(element_string).collect::<Vec<_>>().join(", ")"#),
        ),
        Box::new(
            Fn::new("assert_elements")
                .private()
                .param(Param::new("got", elt.fill("&[$T]")))
                .param(Param::new("want", elt.fill("&[$T]")))
                .param(Param::new("what", "&str"))
                .body_line(
                    r#"assert!(got == want, "{what}: got [{}], want [{}]", show(got), show(want));"#,
                ),
        ),
        Box::new(Struct::new("TestKeyer").private().tuple(elt.fill("Vec<$T>"))),
        Box::new(
            Impl::new("TestKeyer").for_trait("Keyer").method(
                Fn::new("keys")
                    .private()
                    .param(Param::receiver("&self"))
                    .returns(elt.fill("Vec<$T>"))
                    .body_line("self.0.clone()"),
            ),
        ),
        Box::new(vec![
            CodeFragment::doc("A type no set accepts."),
            CodeFragment::line("#[derive(PartialEq, Eq, Hash)]"),
            CodeFragment::line("struct Uniq;"),
        ]),
    ];
    if transforms {
        items.push(Box::new(
            Fn::new("pred")
                .doc("Boxes a predicate so that several can share a table.")
                .private()
                .param(Param::new("f", elt.fill("impl Fn(&$T) -> bool + 'static")))
                .returns(elt.fill("Box<dyn Fn(&$T) -> bool>"))
                .body_line("Box::new(f)"),
        ));
    }
    items
}

#[cfg(test)]
mod tests {
    use makeset_codegen::CodeBuilder;
    use makeset_config::ElementSpec;

    use super::*;

    #[test]
    fn test_fixture_function() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .test_values(0..10_i64)
            .build()
            .unwrap();
        let mut builder = CodeBuilder::rust();
        for item in items(Elt::new(&spec), spec.test_values().unwrap(), false) {
            builder.emit(&item);
        }
        let code = builder.build();
        insta::assert_snapshot!(code.lines().take(14).collect::<Vec<_>>().join("\n"), @r"
        /// The fixture, in ascending order.
        fn test_values() -> [i64; 10] {
            [
                0,
                1,
                2,
                3,
                4,
                5,
                6,
                7,
                8,
                9,
            ]
        ");
        assert!(code.contains("struct TestKeyer(Vec<i64>);"));
        assert!(!code.contains("fn pred("));
    }
}
