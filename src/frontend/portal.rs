use gloo::timers::callback::Timeout;
use js_sys::Reflect;
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsValue};
use web_sys::{window, HtmlElement};

use super::{dom, Page};
use crate::logging::LogLevel;

pub const PORTAL_GLOBAL: &str = "enterLabsPortal";
const PORTAL_SCREEN_ID: &str = "labsLoadingScreen";

/// Shows the labs overlay and navigates once the delay elapses. Without the
/// overlay nothing happens.
pub fn enter(url: &str, delay_ms: u32) {
    let Some(screen) = dom::by_id::<HtmlElement>(PORTAL_SCREEN_ID) else {
        return;
    };

    dom::set_style(&screen, "opacity", "1");
    dom::set_style(&screen, "visibility", "visible");

    let url = url.to_string();
    Timeout::new(delay_ms, move || {
        if let Some(win) = window() {
            let _ = win.location().set_href(&url);
        }
    })
    .forget();
}

/// Exposes `enterLabsPortal()` on the global object for inline handlers.
pub fn install(page: &Page) {
    let Some(win) = window() else {
        return;
    };

    let url = page.config.portal_url.clone();
    let delay_ms = page.config.portal_delay_ms;
    let callback = Closure::<dyn Fn()>::new(move || enter(&url, delay_ms));

    if Reflect::set(&win, &JsValue::from_str(PORTAL_GLOBAL), callback.as_ref()).is_err() {
        page.log(LogLevel::Warn, "portal_install_failed", json!({}));
        return;
    }
    callback.forget();
}
