//! In-memory configuration source.

use serde_json::Value;

use crate::error::Result;
use crate::source::ConfigurationSource;

/// A source returning a fixed tree.
///
/// # Examples
///
/// ```
/// use layerconf::{ConfigurationSource, MemorySource};
/// use serde_json::json;
///
/// let source = MemorySource::new(json!({"key": "value"}));
/// assert_eq!(source.load().unwrap(), json!({"key": "value"}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySource {
    content: Value,
}

impl MemorySource {
    /// Create a source from a tree.
    #[must_use]
    pub fn new(content: Value) -> Self {
        Self { content }
    }

    /// The tree this source returns.
    #[must_use]
    pub fn content(&self) -> &Value {
        &self.content
    }
}

impl ConfigurationSource for MemorySource {
    fn load(&self) -> Result<Value> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

impl From<Value> for MemorySource {
    fn from(content: Value) -> Self {
        Self::new(content)
    }
}
