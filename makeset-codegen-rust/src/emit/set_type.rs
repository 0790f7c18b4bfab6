//! The `Set` type, its queries, and its standard trait implementations.

use super::{Elt, Items};
use crate::ast::{Field, Fn, Impl, Param, Struct};

const CONTAINS_WHERE: [&str; 2] = ["$T: Borrow<Q>", "Q: Hash + Eq + ?Sized + 'a"];

fn query(name: &str) -> Fn {
    Fn::new(name).param(Param::receiver("&self"))
}

/// A method taking `elements: impl IntoIterator<Item = &'a Q>` for any `Q`
/// the element type borrows as.
pub(super) fn borrowed_elements(elt: Elt<'_>, name: &str, receiver: &str) -> Fn {
    let f = Fn::new(name)
        .generic("'a")
        .generic("Q")
        .param(Param::receiver(receiver))
        .param(Param::new("elements", "impl IntoIterator<Item = &'a Q>"))
        .returns("bool");
    CONTAINS_WHERE
        .iter()
        .fold(f, |f, predicate| f.where_clause(elt.fill(predicate)))
}

pub(super) fn items(elt: Elt<'_>) -> Items {
    vec![
        Box::new(set_struct(elt)),
        Box::new(queries(elt)),
        Box::new(
            Fn::new("gather")
                .doc("Collects `elements` into a set that allocates only if one arrives.")
                .private()
                .param(Param::new("elements", elt.fill("impl IntoIterator<Item = $T>")))
                .returns("Set")
                .body(
                    r#"
                    let mut out = Set::default();
                    for e in elements {
                        out.insert(e);
                    }
                    out
                    "#,
                ),
        ),
        Box::new(
            Fn::new("by_len")
                .doc("Orders two sets smaller first.")
                .private()
                .generic("'a")
                .param(Param::new("a", "&'a Set"))
                .param(Param::new("b", "&'a Set"))
                .returns("(&'a Set, &'a Set)")
                .body("if a.len() <= b.len() { (a, b) } else { (b, a) }"),
        ),
        Box::new(
            Impl::new("Set").for_trait("Clone").method(
                Fn::new("clone")
                    .doc("Copies the set. A copy of an empty set is the unset value.")
                    .private()
                    .param(Param::receiver("&self"))
                    .returns("Self")
                    .body(
                        r#"
                        match &self.elts {
                            Some(elts) if !elts.is_empty() => Set {
                                elts: Some(elts.clone()),
                            },
                            _ => Set::default(),
                        }
                        "#,
                    ),
            ),
        ),
        Box::new(
            Impl::new("Set").for_trait("PartialEq").method(
                Fn::new("eq")
                    .private()
                    .param(Param::receiver("&self"))
                    .param(Param::new("other", "&Self"))
                    .returns("bool")
                    .body_line("self.equals(other)"),
            ),
        ),
        Box::new(Impl::new("Set").for_trait("Eq")),
        Box::new(
            Impl::new("Set").for_trait("fmt::Display").method(
                Fn::new("fmt")
                    .doc("Writes `ø` for an empty set, otherwise the elements in ascending\norder between braces.")
                    .private()
                    .param(Param::receiver("&self"))
                    .param(Param::new("f", "&mut fmt::Formatter<'_>"))
                    .returns("fmt::Result")
                    .body(
                        r#"
                        if self.is_empty() {
                            return f.write_str("ø");
                        }
                        let elts: Vec<String> = self.elements().iter().map(element_string).collect();
                        write!(f, "{{{}}}", elts.join(", "))
                        "#,
                    ),
            ),
        ),
        Box::new(
            Impl::new("Set").for_trait("fmt::Debug").method(
                Fn::new("fmt")
                    .private()
                    .param(Param::receiver("&self"))
                    .param(Param::new("f", "&mut fmt::Formatter<'_>"))
                    .returns("fmt::Result")
                    .body_line("fmt::Display::fmt(self, f)"),
            ),
        ),
        Box::new(
            Impl::new("&'a Set")
                .generic("'a")
                .for_trait("IntoIterator")
                .assoc(elt.fill("type Item = &'a $T;"))
                .assoc(elt.fill(
                    "type IntoIter = std::iter::Flatten<std::option::Iter<'a, HashSet<$T>>>;",
                ))
                .method(
                    Fn::new("into_iter")
                        .private()
                        .param(Param::receiver("self"))
                        .returns("Self::IntoIter")
                        .body_line("self.elts.iter().flatten()"),
                ),
        ),
        Box::new(
            Impl::new("Set")
                .for_trait(elt.fill("FromIterator<$T>"))
                .method(
                    Fn::new("from_iter")
                        .private()
                        .generic(elt.fill("I: IntoIterator<Item = $T>"))
                        .param(Param::new("iter", "I"))
                        .returns("Self")
                        .body_line("Set::new(iter)"),
                ),
        ),
        Box::new(
            Impl::new("Set").for_trait(elt.fill("Extend<$T>")).method(
                Fn::new("extend")
                    .private()
                    .generic(elt.fill("I: IntoIterator<Item = $T>"))
                    .param(Param::receiver("&mut self"))
                    .param(Param::new("iter", "I"))
                    .body_line("self.add(iter);"),
            ),
        ),
    ]
}

fn set_struct(elt: Elt<'_>) -> Struct {
    Struct::new("Set")
        .doc(elt.fill(
            "A set of `$T` values.\n\n\
             The zero value, `Set::default()`, is an empty set that holds no\n\
             storage until an element is added.",
        ))
        .derive("Default")
        .field(Field::new("elts", elt.fill("Option<HashSet<$T>>")).private())
}

fn queries(elt: Elt<'_>) -> Impl {
    Impl::new("Set")
        .method(
            Fn::new("new")
                .doc("Returns a set holding exactly the distinct `elements`. The result is\nallocated even when `elements` is empty.")
                .param(Param::new("elements", elt.fill("impl IntoIterator<Item = $T>")))
                .returns("Set")
                .body(
                    r#"
                    let mut elts = HashSet::new();
                    elts.extend(elements);
                    Set { elts: Some(elts) }
                    "#,
                ),
        )
        .method(
            Fn::new("with_capacity")
                .doc("Returns an empty set with room for at least `n` elements.\n\n# Panics\n\nPanics if the capacity overflows, like `HashSet::with_capacity`.")
                .param(Param::new("n", "usize"))
                .returns("Set")
                .body_line("Set { elts: Some(HashSet::with_capacity(n)) }"),
        )
        .method(
            query("is_unset")
                .doc("Reports whether `self` is the unset value rather than a set that was\nallocated. Both behave as the empty set in every other operation.")
                .returns("bool")
                .body_line("self.elts.is_none()"),
        )
        .method(
            query("len")
                .doc("Returns the number of elements in the set.")
                .returns("usize")
                .body_line("self.elts.as_ref().map_or(0, HashSet::len)"),
        )
        .method(
            query("is_empty")
                .returns("bool")
                .body_line("self.len() == 0"),
        )
        .method(
            query("iter")
                .doc("Iterates over the elements in no particular order.")
                .returns(elt.fill("impl Iterator<Item = &$T> + '_"))
                .body_line("self.elts.iter().flatten()"),
        )
        .method(
            borrowed_elements(elt, "contains", "&self")
                .doc("Reports whether every one of `elements` is in the set. This holds\nvacuously when `elements` is empty.")
                .body("elements.into_iter().all(|e| self.elts.as_ref().is_some_and(|elts| elts.contains(e)))"),
        )
        .method(
            borrowed_elements(elt, "contains_any", "&self")
                .doc("Reports whether at least one of `elements` is in the set.")
                .body("elements.into_iter().any(|e| self.elts.as_ref().is_some_and(|elts| elts.contains(e)))"),
        )
        .method(
            query("has")
                .private()
                .param(Param::new("e", elt.fill("&$T")))
                .returns("bool")
                .body_line("self.elts.as_ref().is_some_and(|elts| elts.contains(e))"),
        )
        .method(
            Fn::new("insert")
                .private()
                .param(Param::receiver("&mut self"))
                .param(Param::new("e", elt.name()))
                .returns("bool")
                .body_line("self.elts.get_or_insert_with(HashSet::new).insert(e)"),
        )
        .method(
            query("is_subset")
                .doc("Reports whether every element of `self` is also in `other`.")
                .param(Param::new("other", "&Set"))
                .returns("bool")
                .body(
                    r#"
                    if self.len() > other.len() {
                        return false;
                    }
                    self.iter().all(|e| other.has(e))
                    "#,
                ),
        )
        .method(
            query("equals")
                .doc("Reports whether `self` and `other` have exactly the same elements.")
                .param(Param::new("other", "&Set"))
                .returns("bool")
                .body("self.len() == other.len() && self.is_subset(other)"),
        )
        .method(
            query("intersects")
                .doc("Reports whether `self` and `other` share at least one element.")
                .param(Param::new("other", "&Set"))
                .returns("bool")
                .body(
                    r#"
                    let (small, large) = by_len(self, other);
                    small.iter().any(|e| large.has(e))
                    "#,
                ),
        )
        .method(
            query("elements")
                .doc("Returns the elements in ascending order.")
                .returns(elt.fill("Vec<$T>"))
                .body(
                    r#"
                    let mut out = self.unordered();
                    out.sort_by(compare);
                    out
                    "#,
                ),
        )
        .method(
            query("unordered")
                .doc("Returns the elements in no particular order.")
                .returns(elt.fill("Vec<$T>"))
                .body_line("self.iter().cloned().collect()"),
        )
}
