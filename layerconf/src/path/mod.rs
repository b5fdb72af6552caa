//! Dot-separated key path addressing.
//!
//! A [`KeyPath`] such as `"database.primary.host"` selects a node in a
//! configuration tree by descending through objects one segment at a time,
//! root first. The [`navigator`] functions implement `has`, `get`, `set` and
//! `remove` over any tree.
//!
//! # Totality
//!
//! Key path access never fails. A missing key or a scalar standing where an
//! object is expected makes `has` return `false`, `get` return `None` and
//! `remove` do nothing. `set` clears its own way by replacing such nodes
//! with empty objects.
//!
//! # Examples
//!
//! ```
//! use layerconf::path::{navigator, KeyPath};
//! use serde_json::json;
//!
//! let mut tree = json!({});
//! let path = KeyPath::parse("server.port");
//!
//! navigator::set(&mut tree, &path, json!(8080));
//! assert_eq!(navigator::get(&tree, &path), Some(&json!(8080)));
//!
//! navigator::remove(&mut tree, &path);
//! assert!(!navigator::has(&tree, &path));
//! assert_eq!(tree, json!({"server": {}}));
//! ```

mod key_path;
pub mod navigator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use key_path::{KeyPath, SEPARATOR};
