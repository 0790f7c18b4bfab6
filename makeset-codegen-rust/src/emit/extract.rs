//! Extraction of elements from other collection shapes.

use super::{Elt, Items};
use crate::ast::{Enum, Fn, Impl, Param, Trait, Variant};

fn from_impl(elt: Elt<'_>, generics: &[&str], source: &str, target: &str, body: &str) -> Impl {
    let mut imp = Impl::new(target).for_trait(elt.fill(&format!("From<{source}>")));
    for generic in generics {
        imp = imp.generic(*generic);
    }
    imp.method(
        Fn::new("from")
            .private()
            .param(Param::new("value", elt.fill(source)))
            .returns("Self")
            .body_line(body),
    )
}

fn shape_arg(name: &str) -> Fn {
    Fn::new(name)
        .generic("'a")
        .param(Param::new("value", "impl Into<Shape<'a>>"))
}

pub(super) fn items(elt: Elt<'_>) -> Items {
    let mut items: Items = vec![
        Box::new(
            Trait::new("Keyer")
                .doc("Implemented by values that can report their own element keys.")
                .method(Some("Returns the keys."), elt.fill("fn keys(&self) -> Vec<$T>")),
        ),
        Box::new(
            Impl::new("Set").for_trait("Keyer").method(
                Fn::new("keys")
                    .doc("Returns the elements in ascending order.")
                    .private()
                    .param(Param::receiver("&self"))
                    .returns(elt.fill("Vec<$T>"))
                    .body_line("self.elements()"),
            ),
        ),
        Box::new(shape_enum(elt)),
        Box::new(shape_constructors(elt)),
    ];

    let conversions = [
        (&[][..], "$T", "Shape<'_>", "Shape::Single(value)"),
        (&["'a"][..], "&'a [$T]", "Shape<'a>", "Shape::Sequence(value)"),
        (&["'a"][..], "&'a Vec<$T>", "Shape<'a>", "Shape::Sequence(value)"),
        (&["'a", "const N: usize"][..], "&'a [$T; N]", "Shape<'a>", "Shape::Sequence(value)"),
        (&["'a"][..], "&'a Set", "Shape<'a>", "Shape::Set(value)"),
        (
            &["'a", "S: BuildHasher"][..],
            "&'a HashSet<$T, S>",
            "Shape<'a>",
            "Shape::MapKeys(Box::new(value.iter()))",
        ),
        (
            &["'a", "V", "S: BuildHasher"][..],
            "&'a HashMap<$T, V, S>",
            "Shape<'a>",
            "Shape::MapKeys(Box::new(value.keys()))",
        ),
        (
            &["'a", "V"][..],
            "&'a BTreeMap<$T, V>",
            "Shape<'a>",
            "Shape::MapKeys(Box::new(value.keys()))",
        ),
        (&["'a"][..], "&'a dyn Keyer", "Shape<'a>", "Shape::Keyer(value)"),
    ];
    for (generics, source, target, body) in conversions {
        items.push(Box::new(from_impl(elt, generics, source, target, body)));
    }

    items.push(Box::new(
        shape_arg("from_keys")
            .doc("Returns the set of keys in `value`: a single element, the elements of a\nsequence or set, the keys of a map, or the keys a [`Keyer`] reports.\nAnything else yields the unset value.")
            .returns("Set")
            .body(
                r#"
                match value.into() {
                    Shape::Single(e) => Set::new([e]),
                    Shape::Sequence(elements) => gather(elements.iter().cloned()),
                    Shape::Set(set) => set.clone(),
                    Shape::MapKeys(keys) => gather(keys.cloned()),
                    Shape::Keyer(keyer) => gather(keyer.keys()),
                    Shape::Nil | Shape::MapValues(_) | Shape::Unsupported => Set::default(),
                }
                "#,
            ),
    ));
    items.push(Box::new(
        shape_arg("from_values")
            .doc("Returns the set of values of a map, as built by [`Shape::values_of`].\nAnything else yields the unset value.")
            .returns("Set")
            .body(
                r#"
                match value.into() {
                    Shape::MapValues(values) => gather(values.cloned()),
                    _ => Set::default(),
                }
                "#,
            ),
    ));
    items.push(Box::new(
        shape_arg("contains")
            .doc("Reports whether `element` is among the keys of `value`: the elements of\na sequence or set, the keys of a map, or the keys a [`Keyer`] reports. A\nsingle value is not a collection, so it contains nothing.")
            .param(Param::new("element", elt.fill("&$T")))
            .returns("bool")
            .body(
                r#"
                match value.into() {
                    Shape::Sequence(elements) => index(element, elements).is_some(),
                    Shape::Set(set) => set.has(element),
                    Shape::MapKeys(mut keys) => keys.any(|k| k == element),
                    Shape::Keyer(keyer) => index(element, &keyer.keys()).is_some(),
                    Shape::Nil | Shape::Single(_) | Shape::MapValues(_) | Shape::Unsupported => false,
                }
                "#,
            ),
    ));
    items.push(Box::new(
        Fn::new("index")
            .doc("Returns the position of the first element of `elements` equal to\n`needle`.")
            .param(Param::new("needle", elt.fill("&$T")))
            .param(Param::new("elements", elt.fill("&[$T]")))
            .returns("Option<usize>")
            .body_line("elements.iter().position(|e| e == needle)"),
    ));
    items
}

fn shape_enum(elt: Elt<'_>) -> Enum {
    let iter = elt.fill("Box<dyn Iterator<Item = &'a $T> + 'a>");
    Enum::new("Shape<'a>")
        .doc("The collection shapes [`from_keys`], [`from_values`] and [`contains`]\naccept. Most callers pass a value and let its `From` conversion pick the\nshape; [`Shape::from_any`] picks one at run time.")
        .variant(Variant::new("Nil").doc("No value at all."))
        .variant(
            Variant::new("Single")
                .doc("One element.")
                .tuple(elt.name()),
        )
        .variant(Variant::new("Sequence").tuple(elt.fill("&'a [$T]")))
        .variant(Variant::new("Set").tuple("&'a Set"))
        .variant(
            Variant::new("MapKeys")
                .doc("The keys of a map, or the members of a hash set.")
                .tuple(iter.clone()),
        )
        .variant(Variant::new("MapValues").doc("The values of a map.").tuple(iter))
        .variant(Variant::new("Keyer").tuple("&'a dyn Keyer"))
        .variant(Variant::new("Unsupported").doc("Anything else."))
}

fn shape_constructors(elt: Elt<'_>) -> Impl {
    Impl::new("Shape<'a>")
        .generic("'a")
        .method(
            Fn::new("values_of")
                .doc("The values of a hash map.")
                .generic("K")
                .generic("S: BuildHasher")
                .param(Param::new("map", elt.fill("&'a HashMap<K, $T, S>")))
                .returns("Self")
                .body_line("Shape::MapValues(Box::new(map.values()))"),
        )
        .method(
            Fn::new("btree_values_of")
                .doc("The values of an ordered map.")
                .generic("K")
                .param(Param::new("map", elt.fill("&'a BTreeMap<K, $T>")))
                .returns("Self")
                .body_line("Shape::MapValues(Box::new(map.values()))"),
        )
        .method(
            Fn::new("from_any")
                .doc(elt.fill(
                    "Picks a shape for a value whose type is known only at run time.\n\
                     Recognizes `$T`, `Vec<$T>`, `Set` and `HashSet<$T>`; anything else is\n\
                     [`Shape::Unsupported`].",
                ))
                .param(Param::new("value", "&'a dyn Any"))
                .returns("Self")
                .body(elt.fill(
                    r#"
                    if let Some(e) = value.downcast_ref::<$T>() {
                        return Shape::Single(e.clone());
                    }
                    if let Some(elements) = value.downcast_ref::<Vec<$T>>() {
                        return Shape::Sequence(elements);
                    }
                    if let Some(set) = value.downcast_ref::<Set>() {
                        return Shape::Set(set);
                    }
                    if let Some(set) = value.downcast_ref::<HashSet<$T>>() {
                        return Shape::MapKeys(Box::new(set.iter()));
                    }
                    Shape::Unsupported
                    "#,
                )),
        )
}

#[cfg(test)]
mod tests {
    use makeset_codegen::CodeBuilder;
    use makeset_config::ElementSpec;

    use super::*;

    fn render() -> String {
        let spec = ElementSpec::builder("names", "String", "String::new()")
            .build()
            .unwrap();
        let mut builder = CodeBuilder::rust();
        for item in items(Elt::new(&spec)) {
            builder.emit(&item);
        }
        builder.build()
    }

    #[test]
    fn test_conversions() {
        let code = render();
        for header in [
            "impl From<String> for Shape<'_> {",
            "impl<'a> From<&'a [String]> for Shape<'a> {",
            "impl<'a> From<&'a Vec<String>> for Shape<'a> {",
            "impl<'a, const N: usize> From<&'a [String; N]> for Shape<'a> {",
            "impl<'a> From<&'a Set> for Shape<'a> {",
            "impl<'a, S: BuildHasher> From<&'a HashSet<String, S>> for Shape<'a> {",
            "impl<'a, V, S: BuildHasher> From<&'a HashMap<String, V, S>> for Shape<'a> {",
            "impl<'a, V> From<&'a BTreeMap<String, V>> for Shape<'a> {",
            "impl<'a> From<&'a dyn Keyer> for Shape<'a> {",
        ] {
            assert!(code.contains(header), "missing `{header}`");
        }
    }

    #[test]
    fn test_from_any_downcasts_element_type() {
        let code = render();
        assert!(code.contains("value.downcast_ref::<String>()"));
        assert!(code.contains("value.downcast_ref::<HashSet<String>>()"));
        assert!(!code.contains("$T"));
    }

    #[test]
    fn test_shape_enum() {
        let code = render();
        let start = code.find("pub enum Shape").unwrap();
        let end = start + code[start..].find("\n}\n").unwrap() + 2;
        insta::assert_snapshot!(&code[start..end], @r"
        pub enum Shape<'a> {
            /// No value at all.
            Nil,
            /// One element.
            Single(String),
            Sequence(&'a [String]),
            Set(&'a Set),
            /// The keys of a map, or the members of a hash set.
            MapKeys(Box<dyn Iterator<Item = &'a String> + 'a>),
            /// The values of a map.
            MapValues(Box<dyn Iterator<Item = &'a String> + 'a>),
            Keyer(&'a dyn Keyer),
            /// Anything else.
            Unsupported,
        }
        ");
    }
}
