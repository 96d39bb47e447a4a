//! Local storage adapters.
//!
//! [`Storage`] mirrors the browser's `localStorage`: string values under string
//! keys. [`RecentSearchStore`] is the narrow interface the search overlay uses,
//! implemented over any [`Storage`] by [`StoredRecentSearches`].

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::error::StoreError;

/// Storage key holding the recent-search list.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

// ---------------------------------------------------------------------------
// Key-value storage
// ---------------------------------------------------------------------------

/// String key-value storage with `localStorage` semantics.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

/// In-memory storage. Clones share the same slots, so a test can keep a handle
/// and inspect what the overlay wrote.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value, e.g. a corrupt JSON string.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every operation fail, like a browser with storage disabled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Make writes fail, like an exceeded quota. Reads still succeed.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Raw value under `key`, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.get() {
            return Err(StoreError::Unavailable("storage disabled".into()));
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        self.check_available()?;
        if self.reject_writes.get() {
            return Err(StoreError::Unavailable("quota exceeded".into()));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

/// File-backed storage for the desktop build: one file per key in `dir`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `novella/` under the platform's local data directory
    /// (`~/.local/share` on Linux, `%LOCALAPPDATA%` on Windows).
    pub fn default_location() -> Option<Self> {
        dirs::data_local_dir().map(|d| Self::new(d.join("novella")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Recent-search store
// ---------------------------------------------------------------------------

/// Persistence for the recent-search list.
pub trait RecentSearchStore {
    /// Stored entries, most recent first. Absent storage yields an empty list.
    fn load(&self) -> Result<Vec<String>, StoreError>;
    /// Replace the stored list.
    fn save(&self, entries: &[String]) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Recent searches stored as a JSON string array under [`RECENT_SEARCHES_KEY`].
#[derive(Clone)]
pub struct StoredRecentSearches<S> {
    storage: S,
}

impl<S: Storage> StoredRecentSearches<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: Storage> RecentSearchStore for StoredRecentSearches<S> {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let Some(raw) = self.storage.get_item(RECENT_SEARCHES_KEY)? else {
            return Ok(Vec::new());
        };
        let entries: Vec<String> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: RECENT_SEARCHES_KEY.to_string(),
                source,
            })?;
        debug!(count = entries.len(), "Loaded recent searches");
        Ok(entries)
    }

    fn save(&self, entries: &[String]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(|source| StoreError::Malformed {
            key: RECENT_SEARCHES_KEY.to_string(),
            source,
        })?;
        self.storage.set_item(RECENT_SEARCHES_KEY, &raw)?;
        debug!(count = entries.len(), "Saved recent searches");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove_item(RECENT_SEARCHES_KEY)
    }
}
