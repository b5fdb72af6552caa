//! Environment variable configuration source.
//!
//! Variables named `{PREFIX}_{PATH}` become string values in the tree. The
//! `{PATH}` part is lowercased and split on a separator (`__` by default)
//! into key path segments, so `APP_DATABASE__HOST=db` yields
//! `{"database": {"host": "db"}}`.

use std::env;

use serde_json::Value;

use crate::error::Result;
use crate::path::{navigator, KeyPath};
use crate::source::ConfigurationSource;
use crate::tree;

/// Default separator between key path segments in variable names.
pub const DEFAULT_SEPARATOR: &str = "__";

/// A source that reads prefixed environment variables.
///
/// Values are always strings. Variables are applied in sorted name order, so
/// when one variable addresses a prefix of another (`APP_DB` and
/// `APP_DB__HOST`) the longer one wins deterministically.
///
/// # Examples
///
/// ```
/// use layerconf::EnvironmentSource;
/// use serde_json::json;
///
/// let source = EnvironmentSource::new("APP");
/// let tree = source.load_from([
///     ("APP_SERVER__PORT".to_string(), "8080".to_string()),
///     ("APP_NAME".to_string(), "demo".to_string()),
///     ("OTHER_VAR".to_string(), "ignored".to_string()),
/// ]);
///
/// assert_eq!(tree, json!({"name": "demo", "server": {"port": "8080"}}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSource {
    prefix: String,
    separator: String,
}

impl EnvironmentSource {
    /// Create a source for variables starting with `{prefix}_`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Use a different segment separator.
    ///
    /// An empty separator keeps every variable as a single top-level key.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The variable name prefix (without the trailing `_`).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build a tree from an explicit list of variables.
    ///
    /// Variables that do not carry the prefix, or whose name is only the
    /// prefix, are ignored.
    pub fn load_from<I>(&self, vars: I) -> Value
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut matching: Vec<(KeyPath, String, String)> = vars
            .into_iter()
            .filter_map(|(name, value)| self.key_path(&name).map(|path| (path, name, value)))
            .collect();

        matching.sort_by(|(a, a_name, _), (b, b_name, _)| {
            a.segments().cmp(b.segments()).then_with(|| a_name.cmp(b_name))
        });

        let mut values = tree::empty();
        for (path, name, value) in matching {
            log::trace!("Collected environment variable {name} as '{path}'");
            navigator::set(&mut values, &path, Value::String(value));
        }
        values
    }

    /// Map a variable name to a key path, if it carries the prefix.
    fn key_path(&self, name: &str) -> Option<KeyPath> {
        let rest = name.strip_prefix(self.prefix.as_str())?.strip_prefix('_')?;
        if rest.is_empty() {
            return None;
        }

        let rest = rest.to_lowercase();
        if self.separator.is_empty() {
            return Some(KeyPath::from_segments([rest]));
        }
        Some(KeyPath::from_segments(rest.split(self.separator.as_str())))
    }
}

impl ConfigurationSource for EnvironmentSource {
    fn load(&self) -> Result<Value> {
        // Variables that are not valid Unicode cannot be represented in the tree.
        let vars = env::vars_os().filter_map(|(name, value)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        });
        Ok(self.load_from(vars))
    }

    fn describe(&self) -> String {
        format!("environment {}_*", self.prefix)
    }
}
