//! Page Configuration
//!
//! Reads `window.storefrontConfig` if the page defines one.

use storefront_core::StorefrontConfig;
use wasm_bindgen::JsValue;

/// Global a page may set before the bundle loads
const CONFIG_GLOBAL: &str = "storefrontConfig";

/// Page overrides on top of the defaults; no global means all defaults
pub fn load_config() -> Result<StorefrontConfig, String> {
    let Some(win) = web_sys::window() else {
        return Ok(StorefrontConfig::default());
    };
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(StorefrontConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}
