//! Startup console banner.

use wasm_bindgen::JsValue;

use crate::sections::VERSION;

/// Print the wordmark and version to the browser console.
pub fn print_console_banner() {
    if web_sys::window().is_none() {
        return;
    }

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%cTALENTHUB {VERSION}")),
        &JsValue::from_str("color: #ffffff; font-weight: bold; font-family: monospace; font-size: 14px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cPremium AI Recruitment Dashboard. Built with Rust + Leptos."),
        &JsValue::from_str("color: #71717a;"),
    );
}
