//! Common test utilities for integration tests.
//!
//! This module provides fixture helpers and environment guards shared by
//! the layerconf integration suites.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Path to a file under `tests/fixtures/configs`.
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(relative)
}

/// Write a configuration file into `dir` and return its path.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use the `#[serial]` attribute.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Remove every variable starting with `{prefix}_` for the guards' lifetime.
#[allow(dead_code)]
pub fn clear_prefixed_env_vars(prefix: &str) -> Vec<EnvGuard> {
    let marker = format!("{prefix}_");
    let keys: Vec<String> = env::vars()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(&marker))
        .collect();

    keys.iter().map(|k| EnvGuard::remove(k)).collect()
}
