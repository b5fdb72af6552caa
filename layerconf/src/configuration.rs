//! In-memory configuration objects.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::path::{navigator, KeyPath};
use crate::tree;

/// An in-memory configuration tree addressed by dot-separated key paths.
///
/// A `Configuration` exclusively owns its tree. Reads never fail: a missing
/// or malformed key path simply has no value. Writes never fail either; see
/// [`Configuration::set`] for how obstacles on the way are handled.
///
/// # Examples
///
/// ```
/// use layerconf::Configuration;
/// use serde_json::json;
///
/// let mut config = Configuration::default();
/// config.set("database.host", json!("localhost"));
///
/// assert!(config.has("database.host"));
/// assert_eq!(config.get("database.host"), Some(&json!("localhost")));
/// assert_eq!(config.get("database.port"), None);
/// assert_eq!(config.get_or("database.port", &json!(5432)), &json!(5432));
/// assert_eq!(config.all(), &json!({"database": {"host": "localhost"}}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    values: Value,
}

impl Configuration {
    /// Create a configuration backed by the given tree.
    #[must_use]
    pub fn new(values: Value) -> Self {
        Self { values }
    }

    /// Determine whether a key path has a value.
    ///
    /// A stored `null` counts as a value.
    #[must_use]
    pub fn has(&self, key_path: impl Into<KeyPath>) -> bool {
        navigator::has(&self.values, &key_path.into())
    }

    /// Retrieve the value at a key path, if any.
    ///
    /// The value may be a whole subtree.
    #[must_use]
    pub fn get(&self, key_path: impl Into<KeyPath>) -> Option<&Value> {
        navigator::get(&self.values, &key_path.into())
    }

    /// Retrieve the value at a key path, or `default` when there is none.
    #[must_use]
    pub fn get_or<'a>(&'a self, key_path: impl Into<KeyPath>, default: &'a Value) -> &'a Value {
        self.get(key_path).unwrap_or(default)
    }

    /// Retrieve the value at a key path converted to `T`.
    ///
    /// Returns `Ok(None)` when the key path has no value. The conversion is
    /// plain serde deserialization; no coercion between types is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialize`] if the stored value does not fit `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerconf::Configuration;
    /// use serde_json::json;
    ///
    /// let config = Configuration::new(json!({"server": {"port": 8080, "name": "api"}}));
    ///
    /// assert_eq!(config.get_as::<u16>("server.port").unwrap(), Some(8080));
    /// assert_eq!(config.get_as::<u16>("server.missing").unwrap(), None);
    /// assert!(config.get_as::<u16>("server.name").is_err());
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, key_path: impl Into<KeyPath>) -> Result<Option<T>> {
        let key_path = key_path.into();
        navigator::get(&self.values, &key_path)
            .map(|value| {
                T::deserialize(value).map_err(|e| Error::Deserialize {
                    path: key_path.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    /// Retrieve all configuration values.
    #[must_use]
    pub fn all(&self) -> &Value {
        &self.values
    }

    /// Set the value at a key path.
    ///
    /// Missing intermediate objects are created. Anything that is not an
    /// object and stands in the way of a deeper key path (a scalar, `null` or
    /// a list) is silently replaced by an object.
    pub fn set(&mut self, key_path: impl Into<KeyPath>, value: impl Into<Value>) {
        navigator::set(&mut self.values, &key_path.into(), value.into());
    }

    /// Remove a key path and its value, returning the value if there was one.
    ///
    /// Removing a key path that does not exist is a no-op.
    pub fn remove(&mut self, key_path: impl Into<KeyPath>) -> Option<Value> {
        navigator::remove(&mut self.values, &key_path.into())
    }

    /// Clear all key paths and values.
    pub fn clear(&mut self) {
        self.values = tree::empty();
    }

    /// Consume the configuration, returning its tree.
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.values
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(tree::empty())
    }
}

impl From<Value> for Configuration {
    fn from(values: Value) -> Self {
        Self::new(values)
    }
}

impl From<Configuration> for Value {
    fn from(configuration: Configuration) -> Self {
        configuration.into_inner()
    }
}
