//! Repository Layer
//!
//! Key-value storage abstraction and the persisted cart built on it.

mod cart_repo;
mod cart_store;
mod memory;
mod traits;


pub use cart_repo::{CartRepository, DEFAULT_CART_KEY};
pub use cart_store::{now_millis, CartStore};
pub use memory::MemoryStore;
pub use traits::{KeyValueStore, StorageError, StorageResult};
