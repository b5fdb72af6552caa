//! Property-based tests for the merge engine.
//!
//! Merging is only associative when the same key holds the same kind of node
//! in every tree (a scalar overwriting a list between two list merges breaks
//! it). The generators here therefore tie each key name to one shape:
//! `s*` keys hold scalars, `l*` keys hold lists, `m*` keys hold objects.

use super::{merge, MergeStrategy, TreeMerger};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        (0i64..10).prop_map(Value::from),
        "[xyz]{1,2}".prop_map(Value::from),
    ]
}

fn list() -> impl Strategy<Value = Value> {
    prop::collection::vec((0i64..6).prop_map(Value::from), 1..5).prop_map(Value::from)
}

fn shaped_object() -> impl Strategy<Value = Value> {
    let leaf = (
        prop::option::of(scalar()),
        prop::option::of(scalar()),
        prop::option::of(list()),
        prop::option::of(list()),
    )
        .prop_map(|(s1, s2, l1, l2)| build(vec![("s1", s1), ("s2", s2), ("l1", l1), ("l2", l2)]));

    leaf.prop_recursive(3, 24, 2, |inner| {
        (
            prop::option::of(scalar()),
            prop::option::of(list()),
            prop::option::of(inner.clone()),
            prop::option::of(inner),
        )
            .prop_map(|(s1, l1, m1, m2)| {
                build(vec![("s1", s1), ("l1", l1), ("m1", m1), ("m2", m2)])
            })
    })
}

fn build(entries: Vec<(&str, Option<Value>)>) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        if let Some(value) = value {
            map.insert(key.to_string(), value);
        }
    }
    Value::Object(map)
}

fn any_strategy() -> impl Strategy<Value = MergeStrategy> {
    prop::sample::select(MergeStrategy::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // (a + b) + c == a + (b + c) for consistently shaped trees
    #[test]
    fn merge_associative_for_consistent_shapes(
        a in shaped_object(),
        b in shaped_object(),
        c in shaped_object(),
        strategy in any_strategy(),
    ) {
        let left = merge(&merge(&a, &b, strategy), &c, strategy);
        let right = merge(&a, &merge(&b, &c, strategy), strategy);
        prop_assert_eq!(left, right);
    }

    // Key order: a's keys first, then keys new in b, in b's order
    #[test]
    fn merge_key_order(a in shaped_object(), b in shaped_object(), strategy in any_strategy()) {
        let merged = merge(&a, &b, strategy);
        let a_keys: Vec<&String> = a.as_object().unwrap().keys().collect();
        let b_new: Vec<&String> = b
            .as_object()
            .unwrap()
            .keys()
            .filter(|k| !a.as_object().unwrap().contains_key(*k))
            .collect();
        let expected: Vec<&String> = a_keys.into_iter().chain(b_new).collect();
        let actual: Vec<&String> = merged.as_object().unwrap().keys().collect();
        prop_assert_eq!(actual, expected);
    }

    // merge_all agrees with a manual left fold
    #[test]
    fn merge_all_is_left_fold(
        trees in prop::collection::vec(shaped_object(), 0..5),
        strategy in any_strategy(),
    ) {
        let merger = TreeMerger::new(strategy);
        let mut manual = Value::Object(Map::new());
        for tree in &trees {
            manual = merger.merge(&manual, tree);
        }
        prop_assert_eq!(merger.merge_all(trees), manual);
    }

    // Replace never grows a list beyond the incoming one
    #[test]
    fn replace_takes_incoming_list(a in list(), b in list()) {
        let merger = TreeMerger::new(MergeStrategy::ReplaceArrays);
        prop_assert_eq!(merger.merge(&a, &b), b);
    }
}
