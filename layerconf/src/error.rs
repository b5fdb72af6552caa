//! Error types for the layerconf library.
//!
//! Path operations are total and never produce errors. Everything in this
//! module comes from loading sources, parsing their contents, or explicit
//! typed retrieval requested by the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a layerconf error.
///
/// # Examples
///
/// ```
/// use layerconf::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the layerconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// The file backing a configuration source does not exist.
    #[error("configuration file not found: {}", path.display())]
    SourceNotFound {
        /// The missing file.
        path: PathBuf,
    },

    /// An I/O error occurred while reading a source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source contents could not be parsed in their declared format.
    #[error("failed to parse {origin}: {message}")]
    Parse {
        /// Where the contents came from (usually a file path).
        origin: String,
        /// The parser's description of the failure.
        message: String,
    },

    /// No file format could be inferred for a file source.
    #[error("unsupported configuration format: {}", path.display())]
    UnsupportedFormat {
        /// The file whose extension was not recognised.
        path: PathBuf,
    },

    /// An unknown merge strategy name was given.
    #[error(
        "invalid merge strategy '{value}' \
         (expected replace-arrays, merge-arrays or merge-arrays-unique)"
    )]
    InvalidStrategy {
        /// The rejected name.
        value: String,
    },

    /// A value could not be converted to the type requested by the caller.
    #[error("cannot deserialize value at '{path}': {message}")]
    Deserialize {
        /// The key path that was read.
        path: String,
        /// The deserializer's description of the failure.
        message: String,
    },

    /// An error raised by a caller-defined configuration source.
    #[error("configuration source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an arbitrary error raised by a custom source.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerconf::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "backend offline");
    /// let err = Error::custom(io);
    /// assert!(err.to_string().contains("backend offline"));
    /// ```
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Source(err.into())
    }

    /// Check if the error reports a missing source file.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerconf::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::SourceNotFound { path: PathBuf::from("/nonexistent.yaml") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}
