//! JSON-file-backed store, the browser-profile analog.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{ProfileStore, StoreKey};

/// One JSON object of string values at a caller-chosen path.
///
/// The file is read once on open and rewritten on every write, mirroring the
/// synchronous single-profile semantics of browser local storage. A missing
/// file is an empty store, never an error; the record survives re-opening
/// the same path.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    slots: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the profile at `path`, loading whatever record it holds.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or is not a
    /// JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let slots = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).with_context(|| {
                format!(
                    "profile store at {} is not a JSON object of strings",
                    path.display()
                )
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read profile store at {}", path.display())
                })
            }
        };

        Ok(Self { path, slots })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.slots)
            .context("failed to serialize profile store")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write profile store at {}", self.path.display()))
    }
}

impl ProfileStore for JsonFileStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>> {
        Ok(self.slots.get(key.as_str()).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<()> {
        self.slots
            .insert(key.as_str().to_string(), value.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::Value;

    #[test]
    fn missing_file_is_an_empty_store() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = JsonFileStore::open(dir.path().join("profile.json"))?;
        assert_eq!(store.get(StoreKey::Email)?, None);
        Ok(())
    }

    #[test]
    fn record_survives_reopening_the_same_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("profile.json");

        let mut store = JsonFileStore::open(&path)?;
        store.set(StoreKey::Email, "jane@yahoo.com")?;
        store.set(StoreKey::Role, "Customer")?;
        drop(store);

        let reopened = JsonFileStore::open(&path)?;
        assert_eq!(
            reopened.get(StoreKey::Email)?.as_deref(),
            Some("jane@yahoo.com")
        );
        assert_eq!(reopened.get(StoreKey::Role)?.as_deref(), Some("Customer"));
        Ok(())
    }

    #[test]
    fn on_disk_keys_use_the_profile_layout() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("profile.json");

        let mut store = JsonFileStore::open(&path)?;
        store.set(StoreKey::Email, "jane@yahoo.com")?;
        store.set(StoreKey::Password, "Abcd1!")?;
        store.set(StoreKey::Role, "Customer")?;

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(raw["userEmail"], "jane@yahoo.com");
        assert_eq!(raw["userPassword"], "Abcd1!");
        assert_eq!(raw["userType"], "Customer");
        Ok(())
    }

    #[test]
    fn corrupt_file_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("profile.json");
        fs::write(&path, "not json")?;
        assert!(JsonFileStore::open(&path).is_err());
        Ok(())
    }
}
