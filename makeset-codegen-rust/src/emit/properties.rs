//! Algebraic laws checked over every pair of a handful of sample sets.

use super::{Elt, Items, suite::test_fn};
use crate::ast::Fn;

const LAWS: &[(&str, &str)] = &[
    (
        "test_empty_set_algebra",
        r#"
        for s in samples() {
            for empty in [Set::default(), Set::new([])] {
                assert!(s.union(&empty).equals(&s), "{s} ∪ ø");
                assert!(empty.union(&s).equals(&s), "ø ∪ {s}");
                assert!(s.intersect(&empty).is_unset(), "{s} ∩ ø");
                assert!(empty.intersect(&s).is_unset(), "ø ∩ {s}");
                assert!(s.diff(&empty).equals(&s), "{s} − ø");
                assert!(empty.diff(&s).is_empty(), "ø − {s}");
                assert!(empty.is_subset(&s), "ø ⊆ {s}");
            }
        }
        "#,
    ),
    (
        "test_subset_equality_duality",
        r#"
        for a in samples() {
            for b in samples() {
                assert_eq!(a.equals(&b), a.is_subset(&b) && b.is_subset(&a), "{a} vs {b}");
                assert_eq!(a.intersects(&b), !a.intersect(&b).is_empty(), "{a} meets {b}");
                assert!(a.intersect(&b) == b.intersect(&a), "{a} ∩ {b} is not commutative");
                assert!(a.union(&b) == b.union(&a), "{a} ∪ {b} is not commutative");
                assert!(a.intersect(&b).is_subset(&a), "{a} ∩ {b} ⊄ {a}");
                assert!(a.is_subset(&a.union(&b)), "{a} ⊄ {a} ∪ {b}");
            }
        }
        "#,
    ),
    (
        "test_sym_diff_identity",
        r#"
        for a in samples() {
            for b in samples() {
                let want = a.diff(&b).union(&b.diff(&a));
                let got = a.sym_diff(&b);
                assert!(got.equals(&want), "{a} ⊖ {b} = {got}, want {want}");
                assert!(!got.intersects(&a.intersect(&b)), "{a} ⊖ {b} keeps common elements");
            }
        }
        "#,
    ),
    (
        "test_change_reporting",
        r#"
        for base in samples() {
            for keys in [vec![], test_keys(&[0]), test_keys(&[0, 5, 9])] {
                let mut s = base.clone();
                let before = s.len();
                let changed = s.add(keys.clone());
                assert_eq!(changed, s.len() != before, "{base}.add([{}])", show(&keys));
                let before = s.len();
                let changed = s.discard(&keys);
                assert_eq!(changed, s.len() != before, "{base}.discard([{}])", show(&keys));
                assert!(!s.contains_any(&keys));
            }
            for other in samples() {
                let mut s = base.clone();
                let before = s.len();
                let changed = s.update(&other);
                assert_eq!(changed, s.len() != before, "{base}.update({other})");
                let before = s.len();
                let changed = s.remove(&other);
                assert_eq!(changed, s.len() != before, "{base}.remove({other})");
                assert!(!s.intersects(&other), "{base}.remove({other}) left {s}");
            }
        }
        "#,
    ),
];

pub(super) fn items(elt: Elt<'_>) -> Items {
    let mut items: Items = vec![Box::new(
        Fn::new("samples")
            .doc("Sets covering the unset value, the allocated empty set, and some overlaps.")
            .private()
            .returns("Vec<Set>")
            .body(
                r#"
                vec![
                    Set::default(),
                    Set::new([]),
                    test_set(&[0]),
                    test_set(&[0, 3]),
                    test_set(&[1, 2, 3, 4]),
                    test_set(&[5, 9]),
                    Set::new(test_values()),
                ]
                "#,
            ),
    )];
    for (name, body) in LAWS {
        items.push(Box::new(test_fn(elt, name, body)));
    }
    items
}
