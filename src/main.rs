//! Storefront Frontend Entry Point
//!
//! Attaches the page behaviors and the cart to whatever markup the current
//! page ships, then mounts the floating controls onto the body.

mod app;
mod behaviors;
mod components;
mod config;
mod context;
mod dom;
mod storage;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// `window.storefrontLogs()` returns the retained log lines, oldest first
fn expose_logs() {
    let callback = Closure::<dyn Fn() -> JsValue>::new(|| {
        console_logger::recent()
            .into_iter()
            .map(JsValue::from)
            .collect::<js_sys::Array>()
            .into()
    });
    if let Some(win) = web_sys::window() {
        if let Err(e) = js_sys::Reflect::set(&win, &JsValue::from_str("storefrontLogs"), callback.as_ref()) {
            log::warn!("could not expose storefrontLogs: {:?}", e);
        }
    }
    callback.forget();
}

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (Default::default(), Some(e)),
    };
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }
    expose_logs();
    if let Some(e) = config_error {
        log::warn!("ignoring malformed storefrontConfig: {}", e);
    }
    log::info!("storefront starting, cart slot `{}`", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
