//! Configuration sources.
//!
//! A source produces a raw configuration tree on demand. The builder calls
//! [`ConfigurationSource::load`] once per build and merges the results in
//! registration order; it never inspects where a tree came from.
//!
//! Provided sources:
//!
//! - [`MemorySource`]: a fixed in-memory tree
//! - [`FileSource`]: a JSON or YAML file
//! - [`EnvironmentSource`]: `PREFIX_*` environment variables
//! - [`FnSource`]: any closure returning a tree (see [`from_fn`])

mod environment;
mod file;
mod memory;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;

pub use environment::{EnvironmentSource, DEFAULT_SEPARATOR};
pub use file::{FileFormat, FileSource};
pub use memory::MemorySource;

/// A provider of configuration values.
///
/// Errors returned from `load` are handed back to the caller of
/// [`ConfigurationBuilder::build`](crate::ConfigurationBuilder::build)
/// unchanged.
///
/// # Examples
///
/// ```
/// use layerconf::{ConfigurationSource, Result};
/// use serde_json::{json, Value};
///
/// struct Defaults;
///
/// impl ConfigurationSource for Defaults {
///     fn load(&self) -> Result<Value> {
///         Ok(json!({"log_level": "info"}))
///     }
/// }
///
/// assert_eq!(Defaults.load().unwrap(), json!({"log_level": "info"}));
/// ```
pub trait ConfigurationSource {
    /// Provide configuration values.
    ///
    /// # Errors
    ///
    /// Returns a source-specific error if the values cannot be produced.
    fn load(&self) -> Result<Value>;

    /// A short human-readable description used in log messages.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<S: ConfigurationSource + ?Sized> ConfigurationSource for Arc<S> {
    fn load(&self) -> Result<Value> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: ConfigurationSource + ?Sized> ConfigurationSource for Box<S> {
    fn load(&self) -> Result<Value> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// A source backed by a closure.
///
/// # Examples
///
/// ```
/// use layerconf::source::FnSource;
/// use layerconf::ConfigurationSource;
/// use serde_json::json;
///
/// let source = FnSource::new("computed defaults", || Ok(json!({"workers": 4})));
/// assert_eq!(source.load().unwrap(), json!({"workers": 4}));
/// assert_eq!(source.describe(), "computed defaults");
/// ```
pub struct FnSource<F> {
    name: String,
    load: F,
}

impl<F> FnSource<F>
where
    F: Fn() -> Result<Value>,
{
    /// Wrap a closure under a descriptive name.
    pub fn new(name: impl Into<String>, load: F) -> Self {
        Self {
            name: name.into(),
            load,
        }
    }
}

/// Shorthand for [`FnSource::new`].
///
/// # Examples
///
/// ```
/// use layerconf::source::from_fn;
/// use layerconf::ConfigurationSource;
/// use serde_json::json;
///
/// let source = from_fn("defaults", || Ok(json!({"debug": false})));
/// assert_eq!(source.load().unwrap(), json!({"debug": false}));
/// ```
pub fn from_fn<F>(name: impl Into<String>, load: F) -> FnSource<F>
where
    F: Fn() -> Result<Value>,
{
    FnSource::new(name, load)
}

impl<F> ConfigurationSource for FnSource<F>
where
    F: Fn() -> Result<Value>,
{
    fn load(&self) -> Result<Value> {
        (self.load)()
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").field("name", &self.name).finish_non_exhaustive()
    }
}
