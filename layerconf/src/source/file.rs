//! File-backed configuration sources.
//!
//! Files are read and parsed on every load. JSON and YAML are supported;
//! the format is inferred from the file extension unless set explicitly.
//! A document must have a mapping or sequence at its root; an empty YAML
//! document counts as an empty mapping.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::source::ConfigurationSource;
use crate::tree;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
}

impl FileFormat {
    /// Infer the format from a file extension (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use layerconf::source::FileFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileFormat::from_path(Path::new("app.yml")), Some(FileFormat::Yaml));
    /// assert_eq!(FileFormat::from_path(Path::new("app.JSON")), Some(FileFormat::Json));
    /// assert_eq!(FileFormat::from_path(Path::new("app.ini")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parse file contents into a tree.
    ///
    /// A blank YAML document and a `null` document both yield an empty
    /// object; blank JSON is a parse error. The document root must be a
    /// mapping or a sequence. `origin` names the contents in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the contents are invalid for this format
    /// or the root is a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerconf::source::FileFormat;
    /// use serde_json::json;
    ///
    /// let tree = FileFormat::Yaml.parse("server:\n  port: 8080\n", "inline").unwrap();
    /// assert_eq!(tree, json!({"server": {"port": 8080}}));
    ///
    /// assert!(FileFormat::Json.parse("{not json", "inline").is_err());
    /// assert!(FileFormat::Yaml.parse("production\n", "inline").is_err());
    /// ```
    pub fn parse(self, content: &str, origin: &str) -> Result<Value> {
        if self == Self::Yaml && content.trim().is_empty() {
            return Ok(tree::empty());
        }

        let parsed = match self {
            Self::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
        };

        let message = match parsed {
            Ok(Value::Null) => return Ok(tree::empty()),
            Ok(value @ (Value::Object(_) | Value::Array(_))) => return Ok(value),
            Ok(_) => "expected a mapping or sequence at the document root".to_string(),
            Err(message) => format!("invalid {self}: {message}"),
        };

        Err(Error::Parse {
            origin: origin.to_string(),
            message,
        })
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// A source that reads a JSON or YAML file.
///
/// # Examples
///
/// ```no_run
/// use layerconf::{ConfigurationBuilder, FileSource};
///
/// let config = ConfigurationBuilder::new()
///     .add_source(FileSource::new("config/default.yaml"))
///     .add_source(FileSource::new("config/local.yaml").optional())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
    format: Option<FileFormat>,
    optional: bool,
}

impl FileSource {
    /// Create a source for the given file; the format follows its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
            optional: false,
        }
    }

    /// Force a file format regardless of extension.
    #[must_use]
    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Treat a missing file as an empty tree instead of an error.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a missing file is tolerated.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The format used to parse the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if no format was set and the
    /// extension is not recognised.
    pub fn format(&self) -> Result<FileFormat> {
        self.format
            .or_else(|| FileFormat::from_path(&self.path))
            .ok_or_else(|| Error::UnsupportedFormat {
                path: self.path.clone(),
            })
    }

    /// Read the file contents; `None` if an optional file is missing.
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if self.optional {
                    log::debug!("Optional configuration file {} not found", self.path.display());
                    Ok(None)
                } else {
                    Err(Error::SourceNotFound {
                        path: self.path.clone(),
                    })
                }
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}

impl ConfigurationSource for FileSource {
    fn load(&self) -> Result<Value> {
        let format = self.format()?;

        let Some(content) = self.read()? else {
            return Ok(tree::empty());
        };

        log::debug!(
            "Read {} bytes of {format} from {}",
            content.len(),
            self.path.display()
        );

        format.parse(&content, &self.path.display().to_string())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.yaml", "project: demo\nports:\n  - 80\n  - 443\n");

        let tree = FileSource::new(path).load().unwrap();
        assert_eq!(tree, json!({"project": "demo", "ports": [80, 443]}));
    }

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.json", r#"{"nested": {"key": "value"}}"#);

        let tree = FileSource::new(path).load().unwrap();
        assert_eq!(tree, json!({"nested": {"key": "value"}}));
    }

    #[test]
    fn test_yaml_preserves_key_order() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "order.yml", "zeta: 1\nalpha: 2\nmid: 3\n");

        let tree = FileSource::new(path).load().unwrap();
        let keys: Vec<_> = tree.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = FileSource::new("/nonexistent/path/config.yaml")
            .load()
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_optional_file_is_empty() {
        let tree = FileSource::new("/nonexistent/path/config.yaml")
            .optional()
            .load()
            .unwrap();
        assert_eq!(tree, json!({}));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.yaml", "invalid: yaml: syntax:");

        let err = FileSource::new(path).load().unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_yaml_file_is_empty_tree() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.yaml", "");

        assert_eq!(FileSource::new(path).load().unwrap(), json!({}));
    }

    #[test]
    fn test_empty_json_file_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.json", "  \n");

        let err = FileSource::new(path).load().unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_scalar_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        let yaml = write(&dir, "local.yaml", "production\n");
        let json = write(&dir, "local.json", "42");

        for path in [yaml, json] {
            match FileSource::new(path).load().unwrap_err() {
                Error::Parse { message, .. } => {
                    assert_eq!(message, "expected a mapping or sequence at the document root");
                }
                other => panic!("expected parse error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_sequence_root_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "list.yaml", "- a\n- b\n");

        assert_eq!(FileSource::new(path).load().unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn test_yaml_null_document_is_empty_tree() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "null.yaml", "~\n");

        assert_eq!(FileSource::new(path).load().unwrap(), json!({}));
    }

    #[test]
    fn test_unknown_extension() {
        let err = FileSource::new("settings.ini").load().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "settings.conf", "key: value\n");

        let source = FileSource::new(path).with_format(FileFormat::Yaml);
        assert_eq!(source.format().unwrap(), FileFormat::Yaml);
        assert_eq!(source.load().unwrap(), json!({"key": "value"}));
    }

    #[test]
    fn test_reload_sees_changes() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "live.json", r#"{"v": 1}"#);
        let source = FileSource::new(&path);
        assert_eq!(source.load().unwrap(), json!({"v": 1}));

        fs::write(&path, r#"{"v": 2}"#).unwrap();
        assert_eq!(source.load().unwrap(), json!({"v": 2}));
    }

    #[test]
    fn test_describe_mentions_path() {
        let source = FileSource::new("app.yaml");
        assert!(source.describe().contains("app.yaml"));
        assert!(!source.is_optional());
    }
}
