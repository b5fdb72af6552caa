//! Configuration tree node model.
//!
//! A configuration tree is a [`serde_json::Value`] (built with insertion order
//! preserved): scalars, arrays ("list-like") and objects ("map-like").
//!
//! Empty containers are ambiguous. An empty array and an empty object both
//! classify as map-like *and* list-like, and every consumer checks map-like
//! first. A non-empty object is never list-like, whatever its keys look like.

use serde_json::{Map, Value};

/// Structural classification of a tree node.
///
/// # Examples
///
/// ```
/// use layerconf::tree::NodeShape;
/// use serde_json::json;
///
/// assert_eq!(NodeShape::of(&json!(1)), NodeShape::Scalar);
/// assert_eq!(NodeShape::of(&json!([1])), NodeShape::List);
/// assert_eq!(NodeShape::of(&json!({"a": 1})), NodeShape::Map);
/// assert_eq!(NodeShape::of(&json!([])), NodeShape::Empty);
/// assert_eq!(NodeShape::of(&json!({})), NodeShape::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Null, boolean, number or string.
    Scalar,
    /// A non-empty array.
    List,
    /// A non-empty object.
    Map,
    /// An empty array or object; both map-like and list-like.
    Empty,
}

impl NodeShape {
    /// Classify a node.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(items) if items.is_empty() => Self::Empty,
            Value::Object(entries) if entries.is_empty() => Self::Empty,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Map,
            _ => Self::Scalar,
        }
    }

    /// Whether nodes of this shape can be merged key by key.
    #[must_use]
    pub const fn is_map_like(self) -> bool {
        matches!(self, Self::Map | Self::Empty)
    }

    /// Whether nodes of this shape can be merged as sequences.
    #[must_use]
    pub const fn is_list_like(self) -> bool {
        matches!(self, Self::List | Self::Empty)
    }
}

/// Determine whether a node is an empty array or empty object.
#[must_use]
pub fn is_empty_container(value: &Value) -> bool {
    NodeShape::of(value) == NodeShape::Empty
}

/// Produce an empty map-like tree.
///
/// # Examples
///
/// ```
/// use layerconf::tree;
///
/// let root = tree::empty();
/// assert!(root.as_object().is_some_and(|m| m.is_empty()));
/// ```
#[must_use]
pub fn empty() -> Value {
    Value::Object(Map::new())
}

/// Coerce a node into an object, replacing anything that is not one.
///
/// Non-objects, including empty arrays, are discarded and replaced with a
/// fresh empty object.
pub(crate) fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = empty();
    }
    match node {
        Value::Object(entries) => entries,
        _ => unreachable!("node was just replaced with an object"),
    }
}
