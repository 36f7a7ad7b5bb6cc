//! Cart Store
//!
//! The in-memory cart plus its repository. Every mutation persists before
//! returning, so the slot and the in-memory cart never drift apart within a
//! page.

use log::debug;

use super::cart_repo::CartRepository;
use super::traits::KeyValueStore;
use crate::domain::{AddOutcome, Cart, CartItem, CartResult, ProductDetails};

/// Millisecond wall-clock timestamp used as a new line's id
pub fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

pub struct CartStore<S> {
    repo: CartRepository<S>,
    cart: Cart,
    clock: fn() -> u64,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the cart stored under `key`, starting empty if nothing usable is there
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let repo = CartRepository::new(store, key);
        let cart = repo.load();
        Self {
            repo,
            cart,
            clock: now_millis,
        }
    }

    /// Replace the id clock (tests use a fixed sequence)
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn repository(&self) -> &CartRepository<S> {
        &self.repo
    }

    /// Add one unit of a product, merging on exact (title, price) match
    pub fn add_item(&mut self, product: ProductDetails) -> &Cart {
        let candidate = CartItem::new((self.clock)(), product);
        match self.cart.add(candidate) {
            AddOutcome::Merged { index, quantity } => {
                debug!("cart line {} merged, quantity now {}", index, quantity)
            }
            AddOutcome::Appended { index } => debug!("cart line {} appended", index),
        }
        self.persist()
    }

    /// Set the quantity of the line at `index` to `max(1, quantity)`.
    ///
    /// An out-of-range index changes nothing and persists nothing.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> CartResult<&Cart> {
        let applied = self.cart.update_quantity(index, quantity)?;
        debug!("cart line {} quantity set to {}", index, applied);
        Ok(self.persist())
    }

    /// Remove the line at `index`.
    ///
    /// An out-of-range index changes nothing and persists nothing.
    pub fn remove_item(&mut self, index: usize) -> CartResult<&Cart> {
        let removed = self.cart.remove(index)?;
        debug!("cart line {} ({}) removed", index, removed.title);
        Ok(self.persist())
    }

    pub fn clear(&mut self) -> &Cart {
        self.cart.clear();
        self.persist()
    }

    /// Re-read the slot, picking up writes made by another page context
    pub fn reload(&mut self) -> &Cart {
        self.cart = self.repo.load();
        &self.cart
    }

    fn persist(&self) -> &Cart {
        self.repo.save(&self.cart);
        &self.cart
    }
}
