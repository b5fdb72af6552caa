//! Composition of configuration from ordered sources.
//!
//! Sources are loaded and merged in registration order, so later sources
//! take precedence over earlier ones. A source may be mounted under a key
//! path, in which case its tree is merged into whatever already lives there.

use std::fmt;

use crate::configuration::Configuration;
use crate::error::Result;
use crate::merge::{MergeStrategy, TreeMerger};
use crate::path::{navigator, KeyPath};
use crate::source::ConfigurationSource;
use crate::tree;

/// A registered source and where its tree is mounted.
struct Registration {
    source: Box<dyn ConfigurationSource>,
    mount: Option<KeyPath>,
}

/// Builds a [`Configuration`] by layering sources.
///
/// # Examples
///
/// ```
/// use layerconf::{ConfigurationBuilder, MemorySource};
/// use serde_json::json;
///
/// let config = ConfigurationBuilder::new()
///     .add_source(MemorySource::new(json!({"key": "value"})))
///     .add_source_at(
///         MemorySource::new(json!({"anotherKey": "another value"})),
///         "nested.section",
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     config.all(),
///     &json!({"key": "value", "nested": {"section": {"anotherKey": "another value"}}})
/// );
/// ```
#[derive(Default)]
pub struct ConfigurationBuilder {
    registrations: Vec<Registration>,
}

impl ConfigurationBuilder {
    /// Create a builder with no sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source merged at the root of the tree.
    pub fn add_source(&mut self, source: impl ConfigurationSource + 'static) -> &mut Self {
        self.registrations.push(Registration {
            source: Box::new(source),
            mount: None,
        });
        self
    }

    /// Register a source whose tree is merged in under `mount`.
    ///
    /// An empty mount path mounts at the root. Several sources may share or
    /// overlap mount paths; they are merged in registration order.
    pub fn add_source_at(
        &mut self,
        source: impl ConfigurationSource + 'static,
        mount: impl Into<KeyPath>,
    ) -> &mut Self {
        let mount = Some(mount.into()).filter(|m: &KeyPath| !m.is_root());
        self.registrations.push(Registration {
            source: Box::new(source),
            mount,
        });
        self
    }

    /// Number of registered sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no sources are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Load every source and merge the results, replacing lists.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a source; no configuration is
    /// built in that case.
    pub fn build(&self) -> Result<Configuration> {
        self.build_with_strategy(MergeStrategy::ReplaceArrays)
    }

    /// Load every source and merge the results with `strategy`.
    ///
    /// The builder is left untouched, so this can be called repeatedly.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a source; no configuration is
    /// built in that case.
    pub fn build_with_strategy(&self, strategy: MergeStrategy) -> Result<Configuration> {
        let merger = TreeMerger::new(strategy);
        let mut values = tree::empty();

        for (index, registration) in self.registrations.iter().enumerate() {
            let loaded = registration.source.load()?;

            match &registration.mount {
                None => {
                    log::debug!(
                        "Merging source #{index} ({}) at root",
                        registration.source.describe()
                    );
                    values = merger.merge(&values, &loaded);
                }
                Some(mount) => {
                    log::debug!(
                        "Merging source #{index} ({}) at '{mount}'",
                        registration.source.describe()
                    );
                    let merged = match navigator::get(&values, mount) {
                        Some(base) => merger.merge(base, &loaded),
                        None => merger.merge(&tree::empty(), &loaded),
                    };
                    navigator::set(&mut values, mount, merged);
                }
            }
        }

        log::debug!(
            "Built configuration from {} source(s) with {strategy}",
            self.registrations.len()
        );
        Ok(Configuration::new(values))
    }
}

impl fmt::Debug for ConfigurationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources: Vec<(String, Option<String>)> = self
            .registrations
            .iter()
            .map(|r| (r.source.describe(), r.mount.as_ref().map(ToString::to_string)))
            .collect();
        f.debug_struct("ConfigurationBuilder")
            .field("sources", &sources)
            .finish()
    }
}
