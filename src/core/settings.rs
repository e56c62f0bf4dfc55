//! Persistent user preferences
//!
//! A tiny string key-value store that survives restarts. The keyboard keeps
//! its input language here under [`LANG_KEY`].

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Preference key holding the input language code
pub const LANG_KEY: &str = "lang";

/// Durable string key-value storage
pub trait PreferenceStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value and persist it
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, nothing is persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a TOML file, rewritten on every `set`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Empty store that will write to `path`, ignoring any existing file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    /// Open the store at the default location
    pub fn load() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse preferences file: {:?}", path))?
        } else {
            BTreeMap::new()
        };

        debug!("Opened preferences at {:?} ({} entries)", path, values.len());

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the default preferences file path
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "virtualkeyboard", "VirtualKeyboard")
            .context("Failed to determine preferences directory")?;
        Ok(proj_dirs.data_dir().join("preferences.toml"))
    }

    fn save(&self) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preferences directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(&self.values).context("Failed to serialize preferences")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences file: {:?}", self.path))?;

        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(LANG_KEY), None);

        store.set(LANG_KEY, "ru").unwrap();
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("ru"));

        let store = MemoryStore::with(LANG_KEY, "en");
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("preferences.toml")).unwrap();
        assert_eq!(store.get(LANG_KEY), None);
        // Nothing is written until the first set
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = FileStore::open(&path).unwrap();
        store.set(LANG_KEY, "ru").unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(LANG_KEY).as_deref(), Some("ru"));
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "lang = [").unwrap();
        assert!(FileStore::open(&path).is_err());
    }
}
