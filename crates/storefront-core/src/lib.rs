//! Storefront Core
//!
//! Layered the same way on every page:
//! - domain: cart line items, the cart itself and its errors
//! - repository: key-value storage and the persisted cart store
//! - render / catalog / checkout: projections in and out of page markup
//! - contact / slider: the stand-alone page behaviors' rules
//!
//! Nothing here touches the DOM; the UI crate adapts browser types onto
//! these traits.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod domain;
pub mod render;
pub mod repository;
pub mod slider;

pub use catalog::{scan_entry, CatalogEntry, PriceStrategy, PRICE_STRATEGIES};
pub use checkout::{checkout, CheckoutOutcome};
pub use config::StorefrontConfig;
pub use contact::{ContactError, ContactSubmission};
pub use domain::{Cart, CartError, CartItem, CartResult, ProductDetails};
pub use render::{replace_summary_lines, CartRow, CartSummary, CartView, SummaryContainer};
pub use repository::{CartRepository, CartStore, KeyValueStore, MemoryStore, StorageError};
pub use slider::SlideCursor;
