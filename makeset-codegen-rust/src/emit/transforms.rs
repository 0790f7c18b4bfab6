//! Higher-order transforms over a set's elements.

use super::{Elt, Items};
use crate::ast::{Fn, Impl, Param};

fn predicate(elt: Elt<'_>) -> Param {
    Param::new("mut f", elt.fill("impl FnMut(&$T) -> bool"))
}

fn search(elt: Elt<'_>) -> Param {
    Param::new("f", elt.fill("Option<&dyn Fn(&$T) -> bool>"))
}

pub(super) fn items(elt: Elt<'_>) -> Items {
    let set = Impl::new("Set")
        .method(
            Fn::new("map")
                .doc("Returns the set of `f(e)` for every element `e`. The result is smaller\nthan `self` when `f` maps distinct elements to the same value.")
                .param(Param::receiver("&self"))
                .param(Param::new("f", elt.fill("impl FnMut(&$T) -> $T")))
                .returns("Set")
                .body_line("gather(self.iter().map(f))"),
        )
        .method(
            Fn::new("each")
                .doc("Calls `f` once for every element, in no particular order.")
                .param(Param::receiver("&self"))
                .param(Param::new("f", elt.fill("impl FnMut(&$T)")))
                .body_line("self.iter().for_each(f);"),
        )
        .method(
            Fn::new("select")
                .doc("Returns the elements for which `f` is true.")
                .param(Param::receiver("&self"))
                .param(predicate(elt))
                .returns("Set")
                .body_line("gather(self.iter().filter(|&e| f(e)).cloned())"),
        )
        .method(
            Fn::new("filter")
                .doc("Same as [`Set::select`].")
                .param(Param::receiver("&self"))
                .param(Param::new("f", elt.fill("impl FnMut(&$T) -> bool")))
                .returns("Set")
                .body_line("self.select(f)"),
        )
        .method(
            Fn::new("partition")
                .doc("Splits the set into the elements for which `f` is true and those for\nwhich it is false.")
                .param(Param::receiver("&self"))
                .param(predicate(elt))
                .returns("(Set, Set)")
                .body(
                    r#"
                    let mut yes = Set::default();
                    let mut no = Set::default();
                    for e in self {
                        if f(e) {
                            yes.insert(e.clone());
                        } else {
                            no.insert(e.clone());
                        }
                    }
                    (yes, no)
                    "#,
                ),
        )
        .method(
            Fn::new("count")
                .doc("Returns the number of elements for which `f` is true.")
                .param(Param::receiver("&self"))
                .param(predicate(elt))
                .returns("usize")
                .body_line("self.iter().filter(|&e| f(e)).count()"),
        )
        .method(
            Fn::new("choose")
                .doc("Returns some element for which `f` is true, or any element when `f` is\n`None`, and `true`. Returns the zero value and `false` when there is no\nsuch element. The set is not changed.")
                .param(Param::receiver("&self"))
                .param(search(elt))
                .returns(elt.fill("($T, bool)"))
                .body(
                    r#"
                    let found = match f {
                        Some(f) => self.iter().find(|&e| f(e)),
                        None => self.iter().next(),
                    };
                    match found {
                        Some(e) => (e.clone(), true),
                        None => (zero(), false),
                    }
                    "#,
                ),
        )
        .method(
            Fn::new("pop")
                .doc("Like [`Set::choose`], but also removes the element it returns.")
                .param(Param::receiver("&mut self"))
                .param(search(elt))
                .returns(elt.fill("($T, bool)"))
                .body(
                    r#"
                    let (e, ok) = self.choose(f);
                    if ok {
                        if let Some(elts) = self.elts.as_mut() {
                            elts.remove(&e);
                        }
                    }
                    (e, ok)
                    "#,
                ),
        );
    vec![Box::new(set)]
}

#[cfg(test)]
mod tests {
    use makeset_codegen::CodeBuilder;
    use makeset_config::ElementSpec;

    use super::*;

    #[test]
    fn test_transform_signatures() {
        let spec = ElementSpec::builder("intset", "u32", "0")
            .transforms(true)
            .build()
            .unwrap();
        let mut builder = CodeBuilder::rust();
        for item in items(Elt::new(&spec)) {
            builder.emit(&item);
        }
        let code = builder.build();
        for signature in [
            "pub fn map(&self, f: impl FnMut(&u32) -> u32) -> Set {",
            "pub fn each(&self, f: impl FnMut(&u32)) {",
            "pub fn select(&self, mut f: impl FnMut(&u32) -> bool) -> Set {",
            "pub fn filter(&self, f: impl FnMut(&u32) -> bool) -> Set {",
            "pub fn partition(&self, mut f: impl FnMut(&u32) -> bool) -> (Set, Set) {",
            "pub fn count(&self, mut f: impl FnMut(&u32) -> bool) -> usize {",
            "pub fn choose(&self, f: Option<&dyn Fn(&u32) -> bool>) -> (u32, bool) {",
            "pub fn pop(&mut self, f: Option<&dyn Fn(&u32) -> bool>) -> (u32, bool) {",
        ] {
            assert!(code.contains(signature), "missing `{signature}`");
        }
    }
}
