//! Deterministic deep merging of configuration trees.
//!
//! Objects merge key by key at every depth, lists combine according to a
//! [`MergeStrategy`], and any other pairing is won by the later value. The
//! same rules apply at every nesting level, so any number of trees can be
//! folded in a stable, predictable order.
//!
//! # Examples
//!
//! ```
//! use layerconf::merge::{merge, MergeStrategy};
//! use serde_json::json;
//!
//! let defaults = json!({"server": {"host": "0.0.0.0", "port": 80}, "plugins": ["auth"]});
//! let overrides = json!({"server": {"port": 8080}, "plugins": ["metrics"]});
//!
//! assert_eq!(
//!     merge(&defaults, &overrides, MergeStrategy::ReplaceArrays),
//!     json!({"server": {"host": "0.0.0.0", "port": 8080}, "plugins": ["metrics"]})
//! );
//! assert_eq!(
//!     merge(&defaults, &overrides, MergeStrategy::MergeArrays),
//!     json!({"server": {"host": "0.0.0.0", "port": 8080}, "plugins": ["auth", "metrics"]})
//! );
//! ```

pub mod merger;
pub mod strategy;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use merger::{merge, TreeMerger};
pub use strategy::MergeStrategy;
