//! Durable key-value backends for the session store.
//!
//! All values are strings, mirroring browser `localStorage`.

use ballotbox_core::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::StorageError;

/// A string-keyed, string-valued store that survives page reloads.
pub trait KeyValueStore {
    /// Reads a value.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> StorageError {
        StorageError::Unavailable {
            reason: "memory store lock poisoned".to_string(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

/// Browser `localStorage` of the current window.
///
/// The handle is looked up on every call, so the type holds no JS values
/// and can be shared freely.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "browser")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no window".to_string(),
        })?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable {
                reason: format!("{e:?}"),
            })?
            .ok_or_else(|| StorageError::Unavailable {
                reason: "localStorage is disabled".to_string(),
            })?;
        Ok(storage)
    }
}

#[cfg(feature = "browser")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = Self::storage()?;
        let value = storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable {
                reason: format!("{e:?}"),
            })?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::RemoveFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("token", "abc").expect("set");
        assert_eq!(store.get("token").expect("get"), Some("abc".to_string()));
        assert_eq!(store.len(), 1);

        store.set("token", "def").expect("overwrite");
        assert_eq!(store.get("token").expect("get"), Some("def".to_string()));

        store.remove("token").expect("remove");
        assert_eq!(store.get("token").expect("get"), None);
    }

    #[test]
    fn memory_store_remove_missing_is_ok() {
        let store = MemoryStore::new();
        store.remove("nothing").expect("remove missing");
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("role", "admin").expect("set");
        assert_eq!(other.get("role").expect("get"), Some("admin".to_string()));
    }
}
