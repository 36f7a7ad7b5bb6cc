//! Domain Layer
//!
//! Cart entities and the rules that keep them consistent.
//! This layer has no storage or DOM knowledge.

mod cart;
mod cart_item;
mod error;

pub use cart::{AddOutcome, Cart};
pub use cart_item::{
    clamp_quantity, parse_quantity, CartItem, ProductDetails, DEFAULT_TITLE, MIN_QUANTITY,
};
pub use error::{CartError, CartResult};
