//! Cart Repository
//!
//! Reads and writes the whole cart as one JSON array under a single slot.

use log::{debug, warn};

use super::traits::{KeyValueStore, StorageError, StorageResult};
use crate::domain::Cart;

/// Slot name the cart has always been stored under
pub const DEFAULT_CART_KEY: &str = "cart";

pub struct CartRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted cart; absent or unparseable content yields an empty cart
    pub fn load(&self) -> Cart {
        let Some(raw) = self.store.get(&self.key) else {
            debug!("no cart stored under `{}`", self.key);
            return Cart::new();
        };
        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => {
                debug!("loaded {} cart lines from `{}`", cart.len(), self.key);
                cart
            }
            Err(e) => {
                warn!("discarding unreadable cart in `{}`: {}", self.key, e);
                Cart::new()
            }
        }
    }

    /// Persist the full cart, overwriting the slot. Failures are logged, not returned.
    pub fn save(&self, cart: &Cart) {
        if let Err(e) = self.try_save(cart) {
            warn!("cart not persisted: {}", e);
        }
    }

    pub fn try_save(&self, cart: &Cart) -> StorageResult<()> {
        let raw = serde_json::to_string(cart).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartItem, ProductDetails};
    use crate::repository::MemoryStore;

    #[test]
    fn test_load_missing_slot_is_empty() {
        let repo = CartRepository::new(MemoryStore::new(), DEFAULT_CART_KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        for raw in ["not json", "{\"title\":\"x\"}", "null", "[1, 2]", "42"] {
            let repo = CartRepository::new(MemoryStore::new().with_entry("cart", raw), "cart");
            assert!(repo.load().is_empty(), "expected empty cart for {raw:?}");
        }
    }

    #[test]
    fn test_load_reads_legacy_shape() {
        let raw = r#"[{"id":1718000000000,"title":"Blue Tee","price":12.5,"img":"img/tee.jpg","qty":3}]"#;
        let repo = CartRepository::new(MemoryStore::new().with_entry("cart", raw), "cart");
        let cart = repo.load();
        assert_eq!(cart.len(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.title, "Blue Tee");
        assert_eq!(item.image, "img/tee.jpg");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_save_overwrites_slot() {
        let repo = CartRepository::new(MemoryStore::new().with_entry("cart", "junk"), "cart");
        let cart = Cart::from_items(vec![CartItem::new(1, ProductDetails::new("Cap", 8.0, ""))]);
        repo.save(&cart);
        assert_eq!(repo.load(), cart);
    }

    #[test]
    fn test_try_save_reports_rejected_write() {
        let repo = CartRepository::new(MemoryStore::read_only(), "cart");
        assert!(matches!(repo.try_save(&Cart::new()), Err(StorageError::Write { .. })));
        // best-effort save swallows the same failure
        repo.save(&Cart::new());
    }
}
