//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use storefront_core::repository::StorageResult;
use storefront_core::{CartStore, KeyValueStore, StorageError};

/// Handle to the origin's local storage, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

/// The cart as every page sees it
pub type BrowserCartStore = CartStore<LocalStorageSlot>;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorageSlot {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let storage = local_storage()
            .ok_or_else(|| StorageError::Unavailable("window.localStorage".to_string()))?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
