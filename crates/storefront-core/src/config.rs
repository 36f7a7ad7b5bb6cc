//! Storefront Configuration
//!
//! Page-level knobs, read once at startup. Every field has a default so a
//! page can override any subset or none.

use log::LevelFilter;
use serde::Deserialize;

use crate::repository::DEFAULT_CART_KEY;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Local storage slot holding the cart
    pub storage_key: String,
    /// Slider autoplay period
    pub slide_interval_ms: u32,
    /// Scroll offset past which the back-to-top button shows
    pub scroll_threshold_px: f64,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_CART_KEY.to_string(),
            slide_interval_ms: 3000,
            scroll_threshold_px: 200.0,
            log_level: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parsed log level; unknown names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
