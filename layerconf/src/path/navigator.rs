//! Key path traversal over configuration trees.
//!
//! Every operation here is total: a missing key, a scalar or array standing
//! where an object is expected, or an odd path string degrades to `false`,
//! `None` or a no-op. Nothing in this module returns an error or panics.

use serde_json::Value;

use crate::path::KeyPath;
use crate::tree::ensure_object;

/// Determine whether `path` resolves to a value in `tree`.
///
/// A terminal `null` counts as present.
///
/// # Examples
///
/// ```
/// use layerconf::path::{navigator, KeyPath};
/// use serde_json::json;
///
/// let tree = json!({"nested": {"key": null}});
/// assert!(navigator::has(&tree, &KeyPath::parse("nested.key")));
/// assert!(!navigator::has(&tree, &KeyPath::parse("nested.key.deeper")));
/// ```
#[must_use]
pub fn has(tree: &Value, path: &KeyPath) -> bool {
    get(tree, path).is_some()
}

/// Resolve `path` in `tree`.
///
/// Traversal stops with `None` as soon as the current node is not an object
/// or lacks the next segment. The resolved node may itself be a subtree.
#[must_use]
pub fn get<'a>(tree: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Assign `value` at `path`, creating intermediate objects as needed.
///
/// This is destructive: any node on the way that is not an object (a scalar,
/// `null`, or an array) is replaced by an empty object before descending.
///
/// # Examples
///
/// ```
/// use layerconf::path::{navigator, KeyPath};
/// use serde_json::json;
///
/// let mut tree = json!({"nested": "scalar"});
/// navigator::set(&mut tree, &KeyPath::parse("nested.key"), json!("value"));
/// assert_eq!(tree, json!({"nested": {"key": "value"}}));
/// ```
pub fn set(tree: &mut Value, path: &KeyPath, value: Value) {
    let mut cursor = tree;
    for segment in path.segments() {
        cursor = ensure_object(cursor)
            .entry(segment.as_str())
            .or_insert(Value::Null);
    }
    *cursor = value;
}

/// Remove the value at `path`, returning it if it existed.
///
/// If any ancestor is missing or is not an object the call does nothing.
/// No intermediate nodes are created. Sibling keys keep their order.
///
/// # Examples
///
/// ```
/// use layerconf::path::{navigator, KeyPath};
/// use serde_json::json;
///
/// let mut tree = json!({"a": {"b": 1, "c": 2}});
/// assert_eq!(navigator::remove(&mut tree, &KeyPath::parse("a.b")), Some(json!(1)));
/// assert_eq!(navigator::remove(&mut tree, &KeyPath::parse("x.y.z")), None);
/// assert_eq!(tree, json!({"a": {"c": 2}}));
/// ```
pub fn remove(tree: &mut Value, path: &KeyPath) -> Option<Value> {
    let (parents, leaf) = path.split_leaf();
    descend_mut(tree, parents)?.as_object_mut()?.shift_remove(leaf)
}

/// Follow `segments` through objects only, creating nothing.
fn descend_mut<'a>(tree: &'a mut Value, segments: &[String]) -> Option<&'a mut Value> {
    segments
        .iter()
        .try_fold(tree, |node, segment| node.as_object_mut()?.get_mut(segment))
}
