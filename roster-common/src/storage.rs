//! Key/value storage seam
//!
//! The roster only needs the two `localStorage` calls it actually makes, so the
//! browser adapter lives in `roster-ui` and this crate ships an in-memory
//! implementation for native use and tests.

use std::collections::HashMap;
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage is unavailable")]
    Unavailable,
    #[error("Storage backend error: {0}")]
    Backend(String),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStorage {
    /// Read a value. `Ok(None)` means the key is not set.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key` in a single write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// In-memory storage
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one key.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item("students").unwrap().is_none());
    }

    #[test]
    fn set_item_overwrites() {
        let mut storage = MemoryStorage::with_item("students", "[]");
        storage.set_item("students", "[1]").unwrap();
        assert_eq!(storage.get("students"), Some("[1]"));
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut storage: Box<dyn KeyValueStorage> = Box::new(MemoryStorage::new());
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
