//! Dot-separated key paths.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separator between key path segments.
pub const SEPARATOR: char = '.';

/// A parsed dot-separated address into a configuration tree.
///
/// Parsing never fails. Every `.` splits a segment, so `""`, `"a..b"` and
/// `".a"` produce empty segments that address literal empty-string keys.
///
/// # Examples
///
/// ```
/// use layerconf::path::KeyPath;
///
/// let path = KeyPath::parse("server.http.port");
/// assert_eq!(path.segments(), ["server", "http", "port"]);
/// assert_eq!(path.to_string(), "server.http.port");
///
/// let odd = KeyPath::parse("a..b");
/// assert_eq!(odd.segments(), ["a", "", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dot-separated key path.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split(SEPARATOR).map(str::to_owned).collect(),
        }
    }

    /// Build a key path from pre-split segments.
    ///
    /// Segments are kept verbatim, even when they contain the separator. An
    /// empty iterator yields the single empty segment that `parse("")` would.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerconf::path::KeyPath;
    ///
    /// let path = KeyPath::from_segments(["database", "primary"]);
    /// assert_eq!(path, KeyPath::parse("database.primary"));
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            segments.push(String::new());
        }
        Self { segments }
    }

    /// All segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this is the path parsed from an empty string.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self.segments.as_slice(), [only] if only.is_empty())
    }

    /// Split into the ancestor segments and the final segment.
    #[must_use]
    pub fn split_leaf(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((leaf, parents)) => (parents, leaf.as_str()),
            None => (&[], ""),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for KeyPath {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}
