//! Behavior tests for the generated set, run against the fixture.
//!
//! Assertions never format elements with `{:?}`: the element type need not
//! implement `Debug` when a `toString` body is configured.

use makeset_codegen::Renderable;

use super::{Elt, Items};
use crate::ast::Fn;

/// A `#[test]` function whose body is `body` with `$T` filled in.
pub(super) fn test_fn(elt: Elt<'_>, name: &str, body: &str) -> Fn {
    Fn::new(name).attr("test").private().body(elt.fill(body))
}

fn all(elt: Elt<'_>, tests: &[(&str, &str)]) -> Items {
    tests
        .iter()
        .map(|(name, body)| Box::new(test_fn(elt, name, body)) as Box<dyn Renderable>)
        .collect()
}

pub(super) fn items(elt: Elt<'_>) -> Items {
    all(elt, TESTS)
}

pub(super) fn transform_items(elt: Elt<'_>) -> Items {
    all(elt, TRANSFORM_TESTS)
}

const TESTS: &[(&str, &str)] = &[
    (
        "test_emptiness",
        r#"
        let s = Set::default();
        assert!(s.is_empty(), "unset value is not empty: {s}");
        assert!(s.is_unset());
        assert_eq!(s.len(), 0);
        let s = Set::new([]);
        assert!(s.is_empty(), "Set::new([]) is not empty: {s}");
        assert!(!s.is_unset(), "Set::new([]) returned the unset value");
        let s = Set::with_capacity(4);
        assert!(s.is_empty() && !s.is_unset());
        let s = test_set(&[0]);
        assert!(!s.is_empty(), "{s} is reported empty");
        "#,
    ),
    (
        "test_clone_is_independent",
        r#"
        let a = Set::new(test_values());
        let b = test_set(&[1, 8, 5]);
        let mut c = a.clone();
        assert!(c.remove(&b));
        assert!(!c.equals(&a), "unexpected equality: {a} == {c}");
        assert!(c.update(&b));
        assert!(c.equals(&a), "unexpected inequality: {a} != {c}");
        assert!(Set::default().clone().is_unset(), "clone of the unset value allocated");
        assert!(Set::new([]).clone().is_unset(), "clone of an empty set allocated");
        "#,
    ),
    (
        "test_uniqueness",
        r#"
        let s = test_set(&[0, 5, 1, 2, 1, 3, 8, 4, 9, 4, 4, 6, 7, 2, 0, 0, 1, 4, 8, 4, 9]);
        assert_eq!(s.len(), 10, "length of {s}");
        assert_elements(&s.elements(), &test_values(), "elements");
        let mut seen: Vec<usize> = s.iter().filter_map(key_pos).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
        "#,
    ),
    (
        "test_membership",
        r#"
        let s = test_set(&[0, 1, 2, 3, 4]);
        for (i, v) in test_values().iter().enumerate() {
            assert_eq!(s.contains_any([v]), i < 5, "contains_any({})", element_string(v));
            assert_eq!(s.contains([v]), i < 5, "contains({})", element_string(v));
        }
        let none = test_keys(&[]);
        assert!(s.contains(&none), "no elements are not vacuously contained");
        assert!(!s.contains_any(&none));
        assert!(Set::default().contains(&none));
        "#,
    ),
    (
        "test_contains_any",
        r#"
        let set = Set::new(test_values()[2..].iter().cloned());
        let cases: Vec<(Vec<$T>, bool)> = vec![
            (vec![], false),
            (test_keys(&[0]), false),
            (test_keys(&[1]), false),
            (test_keys(&[0, 1]), false),
            (test_keys(&[7]), true),
            (test_keys(&[8, 3, 4, 9]), true),
            (test_keys(&[0, 7, 1, 0]), true),
        ];
        for (keys, want) in cases {
            assert_eq!(set.contains_any(&keys), want, "contains_any([{}]) on {set}", show(&keys));
        }
        "#,
    ),
    (
        "test_contains_all",
        r#"
        let set = test_set(&[1, 2, 3, 4, 5, 6, 7]);
        let cases: Vec<(Vec<$T>, bool)> = vec![
            (vec![], true),
            (test_keys(&[2, 4, 6]), true),
            (test_keys(&[1, 3, 5, 7]), true),
            (test_keys(&[0]), false),
            (test_keys(&[5, 5, 5]), true),
            (test_keys(&[1, 8]), false),
        ];
        for (keys, want) in cases {
            assert_eq!(set.contains(&keys), want, "contains([{}]) on {set}", show(&keys));
        }
        "#,
    ),
    (
        "test_is_subset",
        r#"
        let empty = Set::default();
        let key = test_set(&[0, 2, 6, 7, 9]);
        for candidate in [Set::new([]), test_set(&[2, 6]), test_set(&[0, 7, 9]), key.clone()] {
            assert!(candidate.is_subset(&key), "{candidate} ⊆ {key} is false");
            assert!(empty.is_subset(&candidate), "ø ⊆ {candidate} is false");
        }
        "#,
    ),
    (
        "test_not_subset",
        r#"
        let cases = [
            (test_set(&[0]), Set::default()),
            (test_set(&[0]), test_set(&[1])),
            (test_set(&[0]), test_set(&[1, 2, 3])),
            (test_set(&[0, 3]), test_set(&[0, 1, 2])),
            (test_set(&[0, 1, 2]), test_set(&[0, 1])),
        ];
        for (candidate, key) in cases {
            assert!(!candidate.is_subset(&key), "{candidate} ⊆ {key} is true");
        }
        "#,
    ),
    (
        "test_equality",
        r#"
        let nat = Set::new(test_values());
        let odd = test_set(&[1, 3, 4, 5, 8]);
        let cases = vec![
            (Set::default(), Set::default(), true),
            (Set::default(), Set::new([]), true),
            (nat.clone(), nat.clone(), true),
            (test_set(&[0]), test_set(&[0]), true),
            (test_set(&[0]), Set::default(), false),
            (Set::default(), test_set(&[0]), false),
            (nat.clone(), odd.clone(), false),
            (test_set(&[0]), test_set(&[1]), false),
            (nat.intersect(&odd), odd.clone(), true),
            (odd.clone(), nat.intersect(&odd), true),
            (odd.intersect(&nat), odd.clone(), true),
            (nat.intersect(&nat), nat.clone(), true),
            (nat.union(&odd), nat.clone(), true),
            (odd.diff(&nat), odd.clone(), false),
            (odd.diff(&nat), Set::default(), true),
            (
                test_set(&[0, 1, 2]).diff(&test_set(&[2, 5, 6])),
                test_set(&[1]).union(&test_set(&[0])),
                true,
            ),
        ];
        for (left, right, want) in cases {
            assert_eq!(left.equals(&right), want, "{left}.equals({right})");
            assert_eq!(left == right, want, "{left} == {right}");
        }
        "#,
    ),
    (
        "test_union",
        r#"
        let vkeys = test_keys(&[0, 4]);
        let vowels = test_set(&[4, 0]);
        let consonants = test_set(&[1, 2, 3, 5, 6, 7, 8, 9]);
        assert_elements(&vowels.union(&Set::default()).elements(), &vkeys, "vowels ∪ ø");
        assert_elements(&Set::new([]).union(&vowels).elements(), &vkeys, "ø ∪ vowels");
        assert_elements(&vowels.union(&consonants).elements(), &test_values(), "vowels ∪ consonants");
        assert_elements(&(&vowels | &consonants).elements(), &test_values(), "vowels | consonants");
        assert!(Set::default().union(&Set::new([])).is_empty());
        "#,
    ),
    (
        "test_intersect",
        r#"
        let empty = Set::default();
        let nat = Set::new(test_values());
        let odd = test_set(&[1, 3, 5, 7, 9]);
        let prime = test_set(&[2, 3, 5, 7]);
        let cases: Vec<(&Set, &Set, Vec<$T>)> = vec![
            (&empty, &empty, vec![]),
            (&empty, &nat, vec![]),
            (&nat, &empty, vec![]),
            (&nat, &nat, test_values().to_vec()),
            (&nat, &odd, test_keys(&[1, 3, 5, 7, 9])),
            (&odd, &nat, test_keys(&[1, 3, 5, 7, 9])),
            (&odd, &prime, test_keys(&[3, 5, 7])),
            (&prime, &nat, test_keys(&[2, 3, 5, 7])),
        ];
        for (left, right, want) in cases {
            let got = left.intersect(right);
            let what = format!("{left} ∩ {right}");
            assert_elements(&got.elements(), &want, &what);
            assert_eq!(left.intersects(right), !want.is_empty(), "{left} intersects {right}");
            assert!(got == left & right, "{what} differs from its operator form");
            if want.is_empty() {
                assert!(got.is_unset(), "{what} allocated an empty result");
            }
        }
        "#,
    ),
    (
        "test_diff",
        r#"
        let empty = Set::default();
        let nat = Set::new(test_values());
        let odd = test_set(&[1, 3, 5, 7, 9]);
        let prime = test_set(&[2, 3, 5, 7]);
        let cases: Vec<(&Set, &Set, Vec<$T>)> = vec![
            (&empty, &empty, vec![]),
            (&empty, &nat, vec![]),
            (&nat, &empty, test_values().to_vec()),
            (&nat, &nat, vec![]),
            (&nat, &odd, test_keys(&[0, 2, 4, 6, 8])),
            (&odd, &nat, vec![]),
            (&odd, &prime, test_keys(&[1, 9])),
            (&prime, &nat, vec![]),
        ];
        for (left, right, want) in cases {
            let got = left.diff(right);
            let what = format!("{left} − {right}");
            assert_elements(&got.elements(), &want, &what);
            assert!(got == left - right, "{what} differs from its operator form");
            if want.is_empty() {
                assert!(got.is_unset(), "{what} allocated an empty result");
            }
        }
        "#,
    ),
    (
        "test_sym_diff",
        r#"
        let empty = Set::default();
        let a = test_set(&[0, 1, 2, 3, 4]);
        let b = test_set(&[0, 4, 5, 6, 7]);
        let c = Set::new(test_values());
        let cases: Vec<(&Set, &Set, Vec<$T>)> = vec![
            (&empty, &empty, vec![]),
            (&a, &empty, test_keys(&[0, 1, 2, 3, 4])),
            (&empty, &b, test_keys(&[0, 4, 5, 6, 7])),
            (&a, &a, vec![]),
            (&a, &b, test_keys(&[1, 2, 3, 5, 6, 7])),
            (&b, &a, test_keys(&[1, 2, 3, 5, 6, 7])),
            (&a, &c, test_keys(&[5, 6, 7, 8, 9])),
            (&c, &b, test_keys(&[1, 2, 3, 8, 9])),
        ];
        for (left, right, want) in cases {
            let got = left.sym_diff(right);
            let what = format!("{left} ⊖ {right}");
            assert_elements(&got.elements(), &want, &what);
            assert!(got == left ^ right, "{what} differs from its operator form");
        }
        "#,
    ),
    (
        "test_update",
        r#"
        let cases: Vec<(Set, Set, Vec<$T>, bool)> = vec![
            (Set::default(), Set::default(), vec![], false),
            (Set::default(), test_set(&[0]), test_keys(&[0]), true),
            (test_set(&[0]), Set::default(), test_keys(&[0]), false),
            (test_set(&[0, 1, 2]), test_set(&[2, 3]), test_keys(&[0, 1, 2, 3]), true),
            (test_set(&[0, 1]), test_set(&[1]), test_keys(&[0, 1]), false),
        ];
        for (mut before, other, want, changed) in cases {
            let what = format!("{before}.update({other})");
            let ok = before.update(&other);
            assert_elements(&before.elements(), &want, &what);
            assert_eq!(ok, changed, "{what} reported change");
        }
        let mut unset = Set::default();
        assert!(!unset.update(&Set::new([])));
        assert!(unset.is_unset(), "update with an empty set allocated");
        "#,
    ),
    (
        "test_add",
        r#"
        let cases: Vec<(Set, Vec<$T>, Vec<$T>, bool)> = vec![
            (Set::default(), vec![], vec![], false),
            (Set::default(), test_keys(&[0]), test_keys(&[0]), true),
            (test_set(&[0]), test_keys(&[0]), test_keys(&[0]), false),
            (test_set(&[1, 3]), test_keys(&[3, 0, 1, 2]), test_keys(&[0, 1, 2, 3]), true),
        ];
        for (mut before, elements, want, changed) in cases {
            let what = format!("{before}.add([{}])", show(&elements));
            let ok = before.add(elements);
            assert_elements(&before.elements(), &want, &what);
            assert_eq!(ok, changed, "{what} reported change");
        }
        let mut unset = Set::default();
        assert!(!unset.add([]));
        assert!(!unset.is_unset(), "add did not allocate storage");
        "#,
    ),
    (
        "test_remove",
        r#"
        let cases: Vec<(Set, Set, Vec<$T>, bool)> = vec![
            (Set::default(), Set::default(), vec![], false),
            (Set::default(), test_set(&[0]), vec![], false),
            (test_set(&[0]), Set::default(), test_keys(&[0]), false),
            (test_set(&[0, 1, 2, 3]), test_set(&[1, 3, 5]), test_keys(&[0, 2]), true),
            (test_set(&[0, 1]), test_set(&[0, 1]), vec![], true),
        ];
        for (mut before, other, want, changed) in cases {
            let what = format!("{before}.remove({other})");
            let ok = before.remove(&other);
            assert_elements(&before.elements(), &want, &what);
            assert_eq!(ok, changed, "{what} reported change");
        }
        let mut unset = Set::default();
        assert!(!unset.remove(&test_set(&[0])));
        assert!(unset.is_unset(), "remove from the unset value allocated");
        "#,
    ),
    (
        "test_discard",
        r#"
        let cases: Vec<(Set, Vec<$T>, Vec<$T>, bool)> = vec![
            (Set::default(), vec![], vec![], false),
            (Set::default(), test_keys(&[0]), vec![], false),
            (test_set(&[0, 1, 2]), test_keys(&[2, 5]), test_keys(&[0, 1]), true),
            (test_set(&[0]), test_keys(&[1]), test_keys(&[0]), false),
        ];
        for (mut before, keys, want, changed) in cases {
            let what = format!("{before}.discard([{}])", show(&keys));
            let ok = before.discard(&keys);
            assert_elements(&before.elements(), &want, &what);
            assert_eq!(ok, changed, "{what} reported change");
        }
        "#,
    ),
    (
        "test_elements_and_iteration",
        r#"
        let s = test_set(&[7, 1, 4]);
        let mut seen = Vec::new();
        for e in &s {
            seen.push(e.clone());
        }
        seen.sort_by(compare);
        assert_elements(&seen, &test_keys(&[1, 4, 7]), "for e in &s");
        assert_eq!(s.iter().count(), 3);
        let mut unordered = s.unordered();
        unordered.sort_by(compare);
        assert_elements(&unordered, &s.elements(), "unordered");
        assert_elements(&s.keys(), &test_keys(&[1, 4, 7]), "keys");
        assert!(Set::default().iter().next().is_none());
        assert!(Set::default().elements().is_empty());
        "#,
    ),
    (
        "test_collect_and_extend",
        r#"
        let collected: Set = test_keys(&[5, 2, 5]).into_iter().collect();
        assert_elements(&collected.elements(), &test_keys(&[2, 5]), "collect");
        assert!(!collected.is_unset());
        let mut extended = Set::default();
        extended.extend(test_keys(&[3]));
        assert!(extended.contains(&test_keys(&[3])), "extend = {extended}");
        "#,
    ),
    (
        "test_display",
        r#"
        assert_eq!(Set::default().to_string(), "ø");
        assert_eq!(Set::new([]).to_string(), "ø");
        let v = test_values();
        let s = test_set(&[2, 0]);
        let want = format!("{{{}, {}}}", element_string(&v[0]), element_string(&v[2]));
        assert_eq!(s.to_string(), want);
        assert_eq!(format!("{s:?}"), want);
        "#,
    ),
    (
        "test_index",
        r#"
        let v = test_values();
        let cases: Vec<(&$T, Vec<$T>, Option<usize>)> = vec![
            (&v[0], vec![], None),
            (&v[1], vec![], None),
            (&v[2], test_keys(&[0, 1]), None),
            (&v[0], test_keys(&[0, 1]), Some(0)),
            (&v[1], test_keys(&[0, 1]), Some(1)),
            (&v[2], test_keys(&[0, 2, 1, 2]), Some(1)),
            (&v[9], test_keys(&[0, 2, 1, 9, 6]), Some(3)),
            (&v[4], test_keys(&[0, 2, 4, 9, 4]), Some(2)),
        ];
        for (needle, elements, want) in cases {
            assert_eq!(
                index(needle, &elements),
                want,
                "index({}, [{}])",
                element_string(needle),
                show(&elements)
            );
        }
        "#,
    ),
    (
        "test_from_values",
        r#"
        let v = test_values();
        let empty: HashMap<u32, $T> = HashMap::new();
        assert!(from_values(Shape::values_of(&empty)).is_unset());
        let by_number: HashMap<i32, $T> =
            HashMap::from([(1, v[1].clone()), (2, v[2].clone()), (3, v[2].clone())]);
        let got = from_values(Shape::values_of(&by_number));
        assert!(got.equals(&test_set(&[1, 2])), "values of a hash map: {got}");
        let by_name: BTreeMap<&str, $T> =
            BTreeMap::from([("foo", v[4].clone()), ("baz", v[4].clone())]);
        let got = from_values(Shape::btree_values_of(&by_name));
        assert!(got.equals(&test_set(&[4])), "values of an ordered map: {got}");
        let keyed: HashMap<$T, i32> = HashMap::from([(v[0].clone(), 1)]);
        assert!(from_values(&keyed).is_unset(), "keys were taken as values");
        assert!(from_values(Shape::Nil).is_unset());
        assert!(from_values(Shape::from_any(&vec![Uniq])).is_unset());
        "#,
    ),
    (
        "test_from_keys",
        r#"
        let v = test_values();
        assert!(from_keys(Shape::from_any(&3.5_f64)).is_unset(), "unkeyable type");
        assert!(from_keys(Shape::from_any(&HashMap::from([(Uniq, Uniq)]))).is_unset());
        assert!(from_keys(Shape::Nil).is_unset());
        let no_keys: Vec<$T> = Vec::new();
        assert!(from_keys(&no_keys).is_unset());
        let no_map: HashMap<$T, f64> = HashMap::new();
        assert!(from_keys(&no_map).is_unset());
        let no_tree: BTreeMap<$T, u8> = BTreeMap::new();
        assert!(from_keys(&no_tree).is_unset());
        let cases: Vec<(Set, Set)> = vec![
            (from_keys(v[0].clone()), test_set(&[0])),
            (from_keys(&test_keys(&[0, 1, 0, 0])), test_set(&[0, 1])),
            (from_keys(&test_keys(&[3, 5])[..]), test_set(&[3, 5])),
            (from_keys(&[v[6].clone(), v[6].clone()]), test_set(&[6])),
            (
                from_keys(&HashMap::from([(v[0].clone(), 1), (v[1].clone(), 2)])),
                test_set(&[0, 1]),
            ),
            (
                from_keys(&TestKeyer(test_keys(&[0, 1, 2])) as &dyn Keyer),
                test_set(&[0, 1, 2]),
            ),
            (from_keys(&test_set(&[4, 7, 8])), test_set(&[4, 7, 8])),
            (
                from_keys(&HashSet::from([v[2].clone(), v[7].clone()])),
                test_set(&[2, 7]),
            ),
            (
                from_keys(Shape::from_any(&test_keys(&[1, 9]))),
                test_set(&[1, 9]),
            ),
            (from_keys(Shape::from_any(&v[5])), test_set(&[5])),
        ];
        for (got, want) in cases {
            assert!(got.equals(&want), "from_keys = {got}, want {want}");
        }
        "#,
    ),
    (
        "test_contains_in_shapes",
        r#"
        let v = test_values();
        let no_keys: Vec<$T> = Vec::new();
        assert!(!contains(&no_keys, &v[0]));
        assert!(contains(&test_keys(&[0]), &v[0]));
        assert!(!contains(&test_keys(&[1]), &v[0]));
        assert!(contains(&test_keys(&[0, 1, 9, 2]), &v[0]));
        let no_map: HashMap<$T, i32> = HashMap::new();
        assert!(!contains(&no_map, &v[2]));
        assert!(contains(&HashMap::from([(v[2].clone(), 1)]), &v[2]));
        assert!(!contains(&HashMap::from([(v[3].clone(), 3)]), &v[2]));
        assert!(contains(&HashMap::from([(v[2].clone(), 1.5), (v[4].clone(), 2.0)]), &v[2]));
        assert!(!contains(&Set::default(), &v[3]));
        assert!(!contains(&Set::new([]), &v[3]));
        assert!(contains(&Set::new([v[3].clone()]), &v[3]));
        assert!(!contains(&test_set(&[0, 1]), &v[3]));
        assert!(contains(&test_set(&[0, 3, 1]), &v[3]));
        assert!(!contains(&TestKeyer(vec![]) as &dyn Keyer, &v[9]));
        assert!(contains(&TestKeyer(test_keys(&[0, 6, 9])) as &dyn Keyer, &v[9]));
        assert!(!contains(&TestKeyer(test_keys(&[0, 6, 7])) as &dyn Keyer, &v[9]));
        assert!(!contains(v[9].clone(), &v[9]), "a single value is not a collection");
        assert!(!contains(Shape::from_any(&3.5_f64), &v[0]));
        "#,
    ),
];

const TRANSFORM_TESTS: &[(&str, &str)] = &[
    (
        "test_choose_and_pop",
        r#"
        let v = test_values();
        let mut s = test_set(&[0, 1, 2, 3, 4]);
        let first = v[0].clone();
        let is_first: &dyn Fn(&$T) -> bool = &|e| *e == first;
        let (got, ok) = s.choose(Some(is_first));
        assert!(ok && got == v[0], "choose(first) = ({}, {ok})", element_string(&got));
        assert_eq!(s.len(), 5, "choose changed the set");
        let never: &dyn Fn(&$T) -> bool = &|_| false;
        let (got, ok) = s.choose(Some(never));
        assert!(!ok && got == zero(), "choose(never) = ({}, {ok})", element_string(&got));
        let (got, ok) = s.choose(None);
        assert!(ok && s.contains([&got]), "choose(None) = ({}, {ok})", element_string(&got));
        let (_, ok) = Set::default().choose(None);
        assert!(!ok, "choose(None) found an element of the unset value");

        let second = v[1].clone();
        let is_second: &dyn Fn(&$T) -> bool = &|e| *e == second;
        let (got, ok) = s.pop(Some(is_second));
        assert!(ok && got == v[1], "pop(second) = ({}, {ok})", element_string(&got));
        assert_elements(&s.elements(), &test_keys(&[0, 2, 3, 4]), "after pop");
        let (got, ok) = s.pop(Some(never));
        assert!(!ok && got == zero(), "pop(never) found an element");
        assert_eq!(s.len(), 4);
        let (_, ok) = Set::new([]).pop(None);
        assert!(!ok);
        "#,
    ),
    (
        "test_map",
        r#"
        let input = Set::new(test_values());
        let mut seen: Vec<Option<$T>> = vec![None; 10];
        let out = input.map(|e| {
            match key_pos(e) {
                Some(p) => seen[p] = Some(e.clone()),
                None => panic!("unknown input {}", element_string(e)),
            }
            e.clone()
        });
        let seen: Vec<$T> = seen.into_iter().flatten().collect();
        assert_elements(&seen, &test_values(), "visited");
        assert!(out.equals(&input), "map(identity) = {out}, want {input}");
        let first = test_values()[0].clone();
        let one = input.map(move |_| first.clone());
        assert_eq!(one.len(), 1, "constant map = {one}");
        assert!(Set::default().map(|e| e.clone()).is_unset());
        "#,
    ),
    (
        "test_each",
        r#"
        let input = Set::new(test_values());
        let mut saw: HashMap<$T, usize> = HashMap::new();
        input.each(|e| *saw.entry(e.clone()).or_insert(0) += 1);
        assert_eq!(saw.len(), 10);
        for e in &input {
            assert_eq!(saw.get(e).copied(), Some(1), "visits of {}", element_string(e));
        }
        "#,
    ),
    (
        "test_select_and_count",
        r#"
        let input = Set::new(test_values());
        let even = input.select(|e| key_pos(e).is_some_and(|p| p % 2 == 0));
        assert!(even.equals(&test_set(&[0, 2, 4, 6, 8])), "even positions: {even}");
        assert!(input.select(|_| false).is_unset(), "select(never) allocated");
        assert!(Set::default().select(|_| true).is_empty());
        let third = input.filter(|e| key_pos(e) == Some(3));
        assert!(third.equals(&test_set(&[3])), "filter = {third}");
        assert_eq!(input.count(|e| key_pos(e).is_some_and(|p| p < 4)), 4);
        assert_eq!(input.count(|_| true), input.len());
        "#,
    ),
    (
        "test_partition",
        r#"
        let nat = Set::new(test_values());
        let cases: Vec<(Set, Set, Set, Box<dyn Fn(&$T) -> bool>, &str)> = vec![
            (test_set(&[0, 1]), test_set(&[0, 1]), Set::default(), pred(|_| true), "all"),
            (test_set(&[0, 1]), Set::default(), test_set(&[0, 1]), pred(|_| false), "none"),
            (
                nat.clone(),
                test_set(&[0, 1, 2, 3, 4]),
                test_set(&[5, 6, 7, 8, 9]),
                pred(|e| key_pos(e).is_some_and(|p| p < 5)),
                "low",
            ),
            (
                nat.clone(),
                test_set(&[1, 3, 5, 7, 9]),
                test_set(&[0, 2, 4, 6, 8]),
                pred(|e| key_pos(e).is_some_and(|p| p % 2 == 1)),
                "odd",
            ),
        ];
        for (set, left, right, f, what) in cases {
            let (yes, no) = set.partition(&f);
            assert!(yes.equals(&left), "{what}: true part {yes}, want {left}");
            assert!(no.equals(&right), "{what}: false part {no}, want {right}");
            assert!(!yes.intersects(&no), "{what}: parts overlap");
            assert!(yes.union(&no).equals(&set), "{what}: parts do not cover {set}");
            assert!(yes.iter().all(|e| f(e)) && !no.iter().any(|e| f(e)));
        }
        "#,
    ),
];
