//! Cart Line Item
//!
//! One product and its requested quantity, in the shape stored under the
//! cart slot: `{id, title, price, img, qty, variation?}`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Title used when neither markup nor storage supplies one
pub const DEFAULT_TITLE: &str = "Product";

/// Quantity floor for every retained line
pub const MIN_QUANTITY: u32 = 1;

/// Product fields pulled from a catalog entry, before they become a line item
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDetails {
    pub title: String,
    pub price: f64,
    pub image: String,
    pub variation: Option<String>,
}

impl ProductDetails {
    pub fn new(title: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price,
            image: image.into(),
            variation: None,
        }
    }

    pub fn with_variation(mut self, variation: impl Into<String>) -> Self {
        self.variation = Some(variation.into());
        self
    }
}

/// A cart line item
///
/// Stored field names are kept short (`img`, `qty`) so existing carts keep
/// loading. Every field decodes leniently: a wrong type or a missing key
/// falls back to its default instead of failing the whole cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Creation timestamp in milliseconds
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default = "default_title", deserialize_with = "lenient_title")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(rename = "img", default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(
        rename = "qty",
        default = "default_quantity",
        deserialize_with = "lenient_quantity"
    )]
    pub quantity: u32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_variation"
    )]
    pub variation: Option<String>,
}

impl CartItem {
    /// Build a quantity-1 line from scanned product details.
    ///
    /// An empty title becomes [`DEFAULT_TITLE`]; a negative or non-finite
    /// price becomes 0.
    pub fn new(id: u64, product: ProductDetails) -> Self {
        let title = if product.title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            product.title
        };
        Self {
            id,
            title,
            price: sanitize_price(product.price),
            image: product.image,
            quantity: MIN_QUANTITY,
            variation: product.variation.filter(|v| !v.is_empty()),
        }
    }

    /// `price × quantity`
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Whether this line is the merge target for a product with the given title and price
    pub fn matches(&self, title: &str, price: f64) -> bool {
        self.title == title && self.price == price
    }
}

/// Clamp a requested quantity to `max(1, requested)`
pub fn clamp_quantity(requested: i64) -> u32 {
    requested.clamp(i64::from(MIN_QUANTITY), i64::from(u32::MAX)) as u32
}

/// Quantity from free-form input text; anything non-numeric or below 1 becomes 1.
///
/// Fractional quantities are floored.
pub fn parse_quantity(input: &str) -> u32 {
    match input.trim().parse::<f64>() {
        Ok(value) => quantity_from_f64(value),
        Err(_) => MIN_QUANTITY,
    }
}

fn quantity_from_f64(value: f64) -> u32 {
    if value.is_finite() && value >= f64::from(MIN_QUANTITY) {
        value.floor().min(f64::from(u32::MAX)) as u32
    } else {
        MIN_QUANTITY
    }
}

fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price >= 0.0 {
        price
    } else {
        0.0
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_quantity() -> u32 {
    MIN_QUANTITY
}

// ========================
// Lenient field decoders
// ========================

/// Numeric view of a stored value: numbers as-is, numeric strings parsed
fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(de: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match &value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        other => number_of(other)
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u64)
            .unwrap_or(0),
    })
}

fn lenient_title<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => s,
        Value::Number(n) => n.to_string(),
        _ => default_title(),
    })
}

fn lenient_price<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(number_of(&value).map(sanitize_price).unwrap_or(0.0))
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_quantity<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(number_of(&value).map(quantity_from_f64).unwrap_or(MIN_QUANTITY))
}

fn lenient_variation<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_at_quantity_one() {
        let item = CartItem::new(7, ProductDetails::new("Lamp", 19.99, "img/lamp.jpg"));
        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.title, "Lamp");
        assert!(item.variation.is_none());
    }

    #[test]
    fn test_new_item_sanitizes_title_and_price() {
        let item = CartItem::new(1, ProductDetails::new("   ", f64::NAN, ""));
        assert_eq!(item.title, DEFAULT_TITLE);
        assert_eq!(item.price, 0.0);

        let item = CartItem::new(1, ProductDetails::new("Mug", -3.0, ""));
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn test_line_total() {
        let mut item = CartItem::new(1, ProductDetails::new("Mug", 4.25, ""));
        item.quantity = 4;
        assert_eq!(item.line_total(), 17.0);
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-5), 1);
        assert_eq!(clamp_quantity(3), 3);
        assert_eq!(clamp_quantity(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("4"), 4);
        assert_eq!(parse_quantity(" 2 "), 2);
        assert_eq!(parse_quantity("2.9"), 2);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-5"), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
    }

    #[test]
    fn test_stored_field_names() {
        let item = CartItem::new(42, ProductDetails::new("Tee", 12.5, "tee.png"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["img"], "tee.png");
        assert_eq!(json["qty"], 1);
        assert!(json.get("variation").is_none());
    }

    #[test]
    fn test_lenient_decoding_fills_defaults() {
        let item: CartItem = serde_json::from_str(r#"{"price":"9.5","qty":"abc"}"#).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.title, DEFAULT_TITLE);
        assert_eq!(item.price, 9.5);
        assert_eq!(item.image, "");
        assert_eq!(item.quantity, 1);
        assert!(item.variation.is_none());
    }

    #[test]
    fn test_lenient_decoding_tolerates_wrong_types() {
        let item: CartItem = serde_json::from_str(
            r#"{"id":1700000000000,"title":"Cap","price":null,"img":5,"qty":-2,"variation":""}"#,
        )
        .unwrap();
        assert_eq!(item.id, 1_700_000_000_000);
        assert_eq!(item.price, 0.0);
        assert_eq!(item.image, "");
        assert_eq!(item.quantity, 1);
        assert!(item.variation.is_none());
    }
}
