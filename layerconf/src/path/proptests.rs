//! Property-based tests for key path handling.
//!
//! The navigator module already has light property tests for set/get/remove.
//! This module runs larger case counts and focuses on parsing and on
//! interactions between successive mutations.

use super::navigator::{get, has, remove, set};
use super::KeyPath;
use proptest::prelude::*;
use serde_json::{json, Value};

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{0,6}"
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Parsing a joined path gives back the original segments
    #[test]
    fn key_path_parse_splits_on_every_dot(segments in path_strategy()) {
        let joined = segments.join(".");
        let path = KeyPath::parse(&joined);
        prop_assert_eq!(path.segments(), segments.as_slice());
        prop_assert_eq!(path.to_string(), joined);
    }

    // Parsing never panics, whatever the input
    #[test]
    fn key_path_parse_is_total(input in ".{0,40}") {
        let path = KeyPath::parse(&input);
        prop_assert!(path.segments().len() >= 1);
        prop_assert_eq!(path.segments().len(), input.matches('.').count() + 1);
    }

    // The last set wins when the same path is written twice
    #[test]
    fn set_twice_last_wins(
        segments in path_strategy(),
        first in any::<i64>(),
        second in any::<i64>(),
    ) {
        let path = KeyPath::from_segments(segments);
        let mut tree = json!({});
        set(&mut tree, &path, json!(first));
        set(&mut tree, &path, json!(second));
        prop_assert_eq!(get(&tree, &path), Some(&json!(second)));
    }

    // Writing a deeper path through an existing leaf replaces the leaf
    #[test]
    fn set_through_leaf_replaces_it(segments in path_strategy(), extra in segment_strategy()) {
        let path = KeyPath::from_segments(segments.clone());
        let mut deeper = segments;
        deeper.push(extra);
        let deeper = KeyPath::from_segments(deeper);

        let mut tree = json!({});
        set(&mut tree, &path, json!("leaf"));
        set(&mut tree, &deeper, json!(1));

        prop_assert!(has(&tree, &deeper));
        prop_assert!(get(&tree, &path).is_some_and(Value::is_object));
    }

    // Removing a path leaves its parent in place
    #[test]
    fn remove_keeps_parent(segments in prop::collection::vec(segment_strategy(), 2..6)) {
        let path = KeyPath::from_segments(segments.clone());
        let parent = KeyPath::from_segments(segments[..segments.len() - 1].to_vec());

        let mut tree = json!({});
        set(&mut tree, &path, json!(true));
        prop_assert_eq!(remove(&mut tree, &path), Some(json!(true)));
        prop_assert!(has(&tree, &parent));
        prop_assert!(!has(&tree, &path));
    }
}
