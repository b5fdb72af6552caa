#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # layerconf
//!
//! Layered, path-addressed configuration.
//!
//! Configuration trees are loaded from ordered sources, deep-merged into one
//! tree and queried with dot-separated key paths such as `database.host`.
//!
//! ## Core Types
//!
//! - [`Configuration`]: an owned tree with `has`/`get`/`set`/`remove`/`clear`
//! - [`ConfigurationBuilder`]: composes sources, optionally mounted under a key path
//! - [`TreeMerger`] and [`MergeStrategy`]: the deep-merge engine
//! - [`ConfigurationSource`]: the contract sources implement, with
//!   [`MemorySource`], [`FileSource`] and [`EnvironmentSource`] provided
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use layerconf::{ConfigurationBuilder, MemorySource, MergeStrategy};
//! use serde_json::json;
//!
//! let mut config = ConfigurationBuilder::new()
//!     .add_source(MemorySource::new(json!({
//!         "server": {"port": 8080, "hosts": ["a"]}
//!     })))
//!     .add_source_at(MemorySource::new(json!({"hosts": ["b"]})), "server")
//!     .build_with_strategy(MergeStrategy::MergeArrays)
//!     .unwrap();
//!
//! assert_eq!(config.get("server.hosts"), Some(&json!(["a", "b"])));
//! assert_eq!(config.get_as::<u16>("server.port").unwrap(), Some(8080));
//!
//! config.set("server.tls.enabled", true);
//! assert!(config.has("server.tls"));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger;
//! builds and file reads are reported at debug level.

pub mod builder;
pub mod configuration;
pub mod error;
pub mod merge;
pub mod path;
pub mod source;
pub mod tree;

// Re-export key types at crate root for convenience
pub use builder::ConfigurationBuilder;
pub use configuration::Configuration;
pub use error::{Error, Result};
pub use merge::{merge, MergeStrategy, TreeMerger};
pub use path::KeyPath;
pub use source::{
    from_fn, ConfigurationSource, EnvironmentSource, FileFormat, FileSource, FnSource,
    MemorySource,
};
pub use tree::NodeShape;
