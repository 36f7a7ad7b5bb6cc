//! Cart Context
//!
//! The page's single cart, held in a signal and provided via Leptos context.

use leptos::prelude::*;
use log::warn;
use storefront_core::{Cart, ProductDetails};

use crate::storage::{BrowserCartStore, LocalStorageSlot};

/// Cart signal plus the operations the page may run on it
#[derive(Clone, Copy)]
pub struct CartContext {
    store: RwSignal<BrowserCartStore>,
}

impl CartContext {
    /// Load the cart stored under `key`
    pub fn open(key: &str) -> Self {
        Self {
            store: RwSignal::new(BrowserCartStore::open(LocalStorageSlot, key)),
        }
    }

    /// Read the cart, subscribing the current effect to changes
    pub fn with_cart<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.store.with(|store| f(store.cart()))
    }

    pub fn with_cart_untracked<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.store.with_untracked(|store| f(store.cart()))
    }

    pub fn add_item(&self, product: ProductDetails) {
        self.store.update(|store| {
            store.add_item(product);
        });
    }

    /// Rejects a stale row index before touching the signal, so a refused
    /// edit does not notify subscribers
    fn check_index(&self, index: usize, action: &str) -> bool {
        match self.with_cart_untracked(|cart| cart.check_index(index)) {
            Ok(()) => true,
            Err(e) => {
                warn!("{} ignored: {}", action, e);
                false
            }
        }
    }

    pub fn update_quantity(&self, index: usize, quantity: u32) {
        if !self.check_index(index, "quantity change") {
            return;
        }
        self.store.update(|store| {
            if let Err(e) = store.update_quantity(index, i64::from(quantity)) {
                warn!("quantity change ignored: {}", e);
            }
        });
    }

    pub fn remove_item(&self, index: usize) {
        if !self.check_index(index, "removal") {
            return;
        }
        self.store.update(|store| {
            if let Err(e) = store.remove_item(index) {
                warn!("removal ignored: {}", e);
            }
        });
    }

    /// Pick up the slot's current content (another tab may have written it)
    pub fn reload(&self) {
        self.store.update(|store| {
            store.reload();
        });
    }
}

pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}
