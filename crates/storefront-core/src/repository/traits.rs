//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for an origin-scoped string slot store.
//! Implementations can use browser local storage, in-memory maps, etc.

use std::sync::Arc;

/// Common result type for storage writes
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store could not be reached at all
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The store refused the write (quota, private mode, ...)
    #[error("write to `{key}` failed: {reason}")]
    Write { key: String, reason: String },
    #[error("could not serialize value: {0}")]
    Serialize(String),
}

/// Synchronous string key-value store
///
/// Reads never fail: an unreadable slot is reported as absent.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
