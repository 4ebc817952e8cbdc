//! Single-slot profile store backing both account handshakes.
//!
//! The store holds at most one account record, spread over three fixed
//! string keys. Registration overwrites all three; login only reads them.
//! There is no delete, no history, and no multi-record indexing, and access
//! is never contended: the UI event model runs one submit handler to
//! completion before the next.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// The three fixed keys of the profile record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoreKey {
    Email,
    Password,
    Role,
}

impl StoreKey {
    /// Key name as it appears in the persisted profile record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "userEmail",
            Self::Password => "userPassword",
            Self::Role => "userType",
        }
    }
}

/// Synchronous key-value access to the single account slot.
pub trait ProfileStore {
    /// Read one key; `None` when it has never been written.
    ///
    /// # Errors
    /// Returns an error when the backing store cannot be read.
    fn get(&self, key: StoreKey) -> Result<Option<String>>;

    /// Write one key, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error when the backing store cannot be written.
    fn set(&mut self, key: StoreKey, value: &str) -> Result<()>;
}
