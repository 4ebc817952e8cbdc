//! In-memory store for tests and embedding.

use std::collections::BTreeMap;

use anyhow::Result;

use super::{ProfileStore, StoreKey};

/// Volatile store; the record lives only as long as the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: BTreeMap<&'static str, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>> {
        Ok(self.slots.get(key.as_str()).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<()> {
        self.slots.insert(key.as_str(), value.to_string());
        Ok(())
    }
}
