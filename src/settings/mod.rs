//! Persisted settings.
//!
//! The only persisted value is the enrichment token, stored under a fixed
//! key. Storage sits behind [`SettingsStore`] so the lookup never depends on
//! a particular substrate.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::TOKEN_SETTINGS_KEY;
use crate::error_handling::SettingsError;

/// Key-value storage for settings.
pub trait SettingsStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Settings kept in a JSON object file.
///
/// A missing file reads as empty; parent directories are created on write.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut settings = self.load()?;
        settings.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&settings)?;
        fs::write(&self.path, content)?;
        debug!("Saved setting {} to {}", key, self.path.display());
        Ok(())
    }
}

/// Settings held in memory for the lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The persisted enrichment token; blank tokens read as absent.
pub fn load_token(store: &dyn SettingsStore) -> Result<Option<String>, SettingsError> {
    Ok(store
        .get(TOKEN_SETTINGS_KEY)?
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty()))
}

/// Persists `token`, trimmed.
pub fn save_token(store: &mut dyn SettingsStore, token: &str) -> Result<(), SettingsError> {
    store.set(TOKEN_SETTINGS_KEY, token.trim())
}
