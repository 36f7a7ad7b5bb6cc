//! Cart Entity
//!
//! Ordered line items; order is insertion order and rows are addressed by
//! position.

use serde::{Deserialize, Serialize};

use super::cart_item::{clamp_quantity, CartItem};
use super::error::{CartError, CartResult};

/// What [`Cart::add`] did with the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// An existing line with the same title and price was incremented
    Merged { index: usize, quantity: u32 },
    /// The candidate became a new last line
    Appended { index: usize },
}

/// The shopping cart
///
/// Serializes as a bare JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// `Ok` when `index` addresses an existing line
    pub fn check_index(&self, index: usize) -> CartResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(CartError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines (the cart badge count)
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Σ `price × quantity`
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Position of the line matching `title` and `price` exactly
    pub fn find_match(&self, title: &str, price: f64) -> Option<usize> {
        self.items.iter().position(|i| i.matches(title, price))
    }

    /// Add a candidate line, merging into an existing (title, price) match.
    ///
    /// A merge bumps the existing quantity by one regardless of the
    /// candidate's quantity and keeps the existing id.
    pub fn add(&mut self, candidate: CartItem) -> AddOutcome {
        match self.find_match(&candidate.title, candidate.price) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = line.quantity.saturating_add(1);
                AddOutcome::Merged {
                    index,
                    quantity: line.quantity,
                }
            }
            None => {
                self.items.push(candidate);
                AddOutcome::Appended {
                    index: self.items.len() - 1,
                }
            }
        }
    }

    /// Set the quantity at `index` to `max(1, quantity)`
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> CartResult<u32> {
        self.check_index(index)?;
        let line = &mut self.items[index];
        line.quantity = clamp_quantity(quantity);
        Ok(line.quantity)
    }

    /// Remove the line at `index`; later lines shift down by one
    pub fn remove(&mut self, index: usize) -> CartResult<CartItem> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductDetails;

    fn line(id: u64, title: &str, price: f64) -> CartItem {
        CartItem::new(id, ProductDetails::new(title, price, ""))
    }

    #[test]
    fn test_add_merges_same_title_and_price() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(line(1, "Sneaker", 49.0)), AddOutcome::Appended { index: 0 });
        assert_eq!(
            cart.add(line(2, "Sneaker", 49.0)),
            AddOutcome::Merged { index: 0, quantity: 2 }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].id, 1);
    }

    #[test]
    fn test_add_keeps_distinct_prices_apart() {
        let mut cart = Cart::new();
        cart.add(line(1, "Sneaker", 49.0));
        cart.add(line(2, "Sneaker", 59.0));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_update_quantity_clamps() {
        let mut cart = Cart::from_items(vec![line(1, "Hat", 5.0)]);
        assert_eq!(cart.update_quantity(0, 0), Ok(1));
        assert_eq!(cart.update_quantity(0, -5), Ok(1));
        assert_eq!(cart.update_quantity(0, 6), Ok(6));
        assert_eq!(cart.items()[0].quantity, 6);
    }

    #[test]
    fn test_update_quantity_out_of_range() {
        let mut cart = Cart::from_items(vec![line(1, "Hat", 5.0)]);
        assert_eq!(
            cart.update_quantity(1, 3),
            Err(CartError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_shifts_following_lines() {
        let mut cart = Cart::from_items(vec![line(1, "A", 1.0), line(2, "B", 2.0), line(3, "C", 3.0)]);
        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[1].title, "C");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = Cart::new();
        assert_eq!(cart.remove(0), Err(CartError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_check_index() {
        let cart = Cart::from_items(vec![line(1, "A", 1.0), line(2, "B", 2.0)]);
        assert_eq!(cart.check_index(0), Ok(()));
        assert_eq!(cart.check_index(1), Ok(()));
        assert_eq!(cart.check_index(2), Err(CartError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(Cart::new().check_index(0), Err(CartError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_serializes_as_array() {
        let cart = Cart::from_items(vec![line(1, "A", 1.0)]);
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
