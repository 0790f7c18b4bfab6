//! Set algebra, in-place mutation, and the operator forms of the algebra.

use super::{Elt, Items, set_type::borrowed_elements};
use crate::ast::{Fn, Impl, Param};

const OPERATORS: [(&str, &str, &str); 4] = [
    ("BitOr", "bitor", "union"),
    ("BitAnd", "bitand", "intersect"),
    ("Sub", "sub", "diff"),
    ("BitXor", "bitxor", "sym_diff"),
];

fn binary(name: &str) -> Fn {
    Fn::new(name)
        .param(Param::receiver("&self"))
        .param(Param::new("other", "&Set"))
        .returns("Set")
}

fn mutator(name: &str) -> Fn {
    Fn::new(name).param(Param::receiver("&mut self")).returns("bool")
}

pub(super) fn items(elt: Elt<'_>) -> Items {
    let mut items: Items = vec![Box::new(algebra()), Box::new(mutation(elt))];
    for (trait_name, method, op) in OPERATORS {
        items.push(Box::new(
            Impl::new("&Set")
                .for_trait(format!("{trait_name}<&Set>"))
                .assoc("type Output = Set;")
                .method(
                    Fn::new(method)
                        .private()
                        .param(Param::receiver("self"))
                        .param(Param::new("other", "&Set"))
                        .returns("Set")
                        .body_line(format!("self.{op}(other)")),
                ),
        ));
    }
    items
}

fn algebra() -> Impl {
    Impl::new("Set")
        .method(
            binary("union")
                .doc("Returns the elements of `self` and `other` combined.")
                .body(
                    r#"
                    if self.is_empty() {
                        return other.clone();
                    }
                    if other.is_empty() {
                        return self.clone();
                    }
                    let (small, large) = by_len(self, other);
                    let mut out = large.clone();
                    out.add(small.iter().cloned());
                    out
                    "#,
                ),
        )
        .method(
            binary("intersect")
                .doc("Returns the elements common to `self` and `other`. An empty result is\nthe unset value.")
                .body(
                    r#"
                    let (small, large) = by_len(self, other);
                    gather(small.iter().filter(|&e| large.has(e)).cloned())
                    "#,
                ),
        )
        .method(
            binary("diff")
                .doc("Returns the elements of `self` that are not in `other`. An empty result\nis the unset value.")
                .body(
                    r#"
                    if other.is_empty() {
                        return self.clone();
                    }
                    gather(self.iter().filter(|&e| !other.has(e)).cloned())
                    "#,
                ),
        )
        .method(
            binary("sym_diff")
                .doc("Returns the elements in exactly one of `self` and `other`.")
                .body_line("self.union(other).diff(&self.intersect(other))"),
        )
}

fn mutation(elt: Elt<'_>) -> Impl {
    Impl::new("Set")
        .method(
            mutator("add")
                .doc("Adds `elements` to the set and reports whether it changed. Storage is\nallocated even when `elements` is empty.")
                .param(Param::new("elements", elt.fill("impl IntoIterator<Item = $T>")))
                .body(
                    r#"
                    let elts = self.elts.get_or_insert_with(HashSet::new);
                    let before = elts.len();
                    elts.extend(elements);
                    elts.len() != before
                    "#,
                ),
        )
        .method(
            mutator("update")
                .doc("Adds the elements of `other` and reports whether the set changed.")
                .param(Param::new("other", "&Set"))
                .body(
                    r#"
                    if other.is_empty() {
                        return false;
                    }
                    self.add(other.iter().cloned())
                    "#,
                ),
        )
        .method(
            borrowed_elements(elt, "discard", "&mut self")
                .doc("Removes `elements` from the set and reports whether it changed.")
                .body(
                    r#"
                    let Some(elts) = self.elts.as_mut() else {
                        return false;
                    };
                    let before = elts.len();
                    for e in elements {
                        elts.remove(e);
                    }
                    elts.len() != before
                    "#,
                ),
        )
        .method(
            mutator("remove")
                .doc("Removes the elements of `other` and reports whether the set changed.")
                .param(Param::new("other", "&Set"))
                .body(
                    r#"
                    let Some(elts) = self.elts.as_mut() else {
                        return false;
                    };
                    let before = elts.len();
                    for e in other {
                        elts.remove(e);
                    }
                    elts.len() != before
                    "#,
                ),
        )
}
