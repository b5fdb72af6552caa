//! Merge strategies for list-like nodes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How two list-like nodes are combined when they meet during a merge.
///
/// The strategy only matters where two list-like nodes meet. Objects always
/// merge key by key and everything else is replaced by the later value.
///
/// # Examples
///
/// ```
/// use layerconf::MergeStrategy;
///
/// assert_eq!(MergeStrategy::default(), MergeStrategy::ReplaceArrays);
/// assert_eq!("merge-arrays".parse::<MergeStrategy>().unwrap(), MergeStrategy::MergeArrays);
/// assert_eq!(
///     "MERGE_ARRAYS_UNIQUE".parse::<MergeStrategy>().unwrap(),
///     MergeStrategy::MergeArraysUnique
/// );
/// assert_eq!(MergeStrategy::ReplaceArrays.to_string(), "replace-arrays");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// The later list replaces the earlier one.
    #[default]
    ReplaceArrays,
    /// Concatenate both lists, keeping duplicates.
    MergeArrays,
    /// Concatenate both lists, dropping values already seen.
    MergeArraysUnique,
}

impl MergeStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::ReplaceArrays,
        Self::MergeArrays,
        Self::MergeArraysUnique,
    ];

    /// The canonical kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReplaceArrays => "replace-arrays",
            Self::MergeArrays => "merge-arrays",
            Self::MergeArraysUnique => "merge-arrays-unique",
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeStrategy {
    type Err = Error;

    /// Parses kebab-case or SCREAMING_SNAKE_CASE names, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| Error::InvalidStrategy {
                value: s.to_string(),
            })
    }
}
