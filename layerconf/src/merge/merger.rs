//! Recursive merging of configuration trees.
//!
//! Dispatch for a pair of nodes `(a, b)`, evaluated in this order:
//!
//! 1. both map-like: merge key by key, recursing on shared keys;
//! 2. both list-like: combine according to the [`MergeStrategy`];
//! 3. anything else: `b` wins.
//!
//! Empty containers are both map-like and list-like, so two of them take the
//! first branch. When both sides are empty the result keeps `b`'s shape.

use serde_json::{Map, Value};

use crate::merge::MergeStrategy;
use crate::tree::{self, NodeShape};

/// Merges configuration trees under a fixed [`MergeStrategy`].
///
/// Merging is pure: inputs are borrowed and a fresh tree is returned.
///
/// # Examples
///
/// ```
/// use layerconf::{MergeStrategy, TreeMerger};
/// use serde_json::json;
///
/// let merger = TreeMerger::new(MergeStrategy::MergeArraysUnique);
/// let merged = merger.merge(
///     &json!({"tags": ["a", "b"], "db": {"host": "localhost"}}),
///     &json!({"tags": ["b", "c"], "db": {"port": 5432}}),
/// );
///
/// assert_eq!(
///     merged,
///     json!({"tags": ["a", "b", "c"], "db": {"host": "localhost", "port": 5432}})
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeMerger {
    strategy: MergeStrategy,
}

impl TreeMerger {
    /// Create a merger using the given list strategy.
    #[must_use]
    pub const fn new(strategy: MergeStrategy) -> Self {
        Self { strategy }
    }

    /// The list strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Merge `b` over `a`.
    #[must_use]
    pub fn merge(&self, a: &Value, b: &Value) -> Value {
        let (a_shape, b_shape) = (NodeShape::of(a), NodeShape::of(b));

        if a_shape.is_map_like() && b_shape.is_map_like() {
            return self.merge_maps(a, b);
        }

        if a_shape.is_list_like() && b_shape.is_list_like() {
            return match self.strategy {
                MergeStrategy::ReplaceArrays => b.clone(),
                _ => Value::Array(self.merge_lists(list_items(a), list_items(b))),
            };
        }

        b.clone()
    }

    /// Fold trees left to right, starting from an empty object.
    ///
    /// Later trees take precedence over earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerconf::TreeMerger;
    /// use serde_json::json;
    ///
    /// let merged = TreeMerger::default().merge_all([
    ///     json!({"timeout": 100, "cache": {"mode": "off"}}),
    ///     json!({"timeout": 200}),
    ///     json!({"cache": {"mode": "on"}}),
    /// ]);
    /// assert_eq!(merged, json!({"timeout": 200, "cache": {"mode": "on"}}));
    /// ```
    #[must_use]
    pub fn merge_all<I>(&self, trees: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        trees
            .into_iter()
            .fold(tree::empty(), |merged, next| self.merge(&merged, &next))
    }

    /// Combine two lists according to the strategy.
    ///
    /// # Merging Rules
    ///
    /// - `ReplaceArrays`: `b` verbatim
    /// - `MergeArrays`: `a` followed by `b`, duplicates kept
    /// - `MergeArraysUnique`: `a` followed by `b`, keeping only the first
    ///   occurrence of each value (duplicates inside `a` are dropped too)
    ///
    /// Deduplication compares each value against those already kept, which
    /// is quadratic but preserves first-seen order for any value, including
    /// objects that cannot be hashed or sorted.
    #[must_use]
    pub fn merge_lists(&self, a: &[Value], b: &[Value]) -> Vec<Value> {
        match self.strategy {
            MergeStrategy::ReplaceArrays => b.to_vec(),
            MergeStrategy::MergeArrays => a.iter().chain(b).cloned().collect(),
            MergeStrategy::MergeArraysUnique => {
                let mut unique: Vec<Value> = Vec::with_capacity(a.len() + b.len());
                for value in a.iter().chain(b) {
                    if !unique.contains(value) {
                        unique.push(value.clone());
                    }
                }
                unique
            }
        }
    }

    /// Merge two map-like nodes key by key.
    ///
    /// `a`'s keys keep their order; keys only in `b` are appended in `b`'s
    /// order.
    fn merge_maps(&self, a: &Value, b: &Value) -> Value {
        if tree::is_empty_container(a) && tree::is_empty_container(b) {
            return b.clone();
        }

        let mut merged: Map<String, Value> = a.as_object().cloned().unwrap_or_default();

        if let Some(entries) = b.as_object() {
            for (key, incoming) in entries {
                let value = match merged.get(key) {
                    Some(existing) => self.merge(existing, incoming),
                    None => incoming.clone(),
                };
                merged.insert(key.clone(), value);
            }
        }

        Value::Object(merged)
    }
}

/// Merge `b` over `a` with the given strategy.
///
/// # Examples
///
/// ```
/// use layerconf::{merge, MergeStrategy};
/// use serde_json::json;
///
/// let a = json!({"key": [1, 2, 3]});
/// let b = json!({"key": [3, 4, 5]});
/// let merged = merge(&a, &b, MergeStrategy::MergeArrays);
/// assert_eq!(merged, json!({"key": [1, 2, 3, 3, 4, 5]}));
/// ```
#[must_use]
pub fn merge(a: &Value, b: &Value, strategy: MergeStrategy) -> Value {
    TreeMerger::new(strategy).merge(a, b)
}

/// Items of a list-like node; an empty object has none.
fn list_items(value: &Value) -> &[Value] {
    value.as_array().map_or(&[], Vec::as_slice)
}
