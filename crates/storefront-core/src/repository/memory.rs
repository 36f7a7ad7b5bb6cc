//! In-Memory Store
//!
//! `KeyValueStore` over a `HashMap`, for tests and non-browser hosts.

use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::{KeyValueStore, StorageError, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like local storage with a full quota
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seed a slot directly, bypassing the read-only flag
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cart"), None);
        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let store = MemoryStore::read_only().with_entry("cart", "[]");
        assert!(matches!(store.set("cart", "[1]"), Err(StorageError::Write { .. })));
        assert_eq!(store.get("cart").as_deref(), Some("[]"));
    }
}
