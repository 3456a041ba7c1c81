//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use wasm_bindgen::JsValue;

/// Read a string global from `window`, used as a deployment override hook
fn read_global(key: &str) -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Get the base URL for API requests
///
/// A deployment can set `window.SALES_DASH_API_BASE` to point the client
/// at any backend. Without the override the URL is derived from the
/// current window location, using port 5000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:5000" or "https://example.com:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = read_global("SALES_DASH_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```text
/// api_url("/api/sales") -> "http://localhost:5000/api/sales"
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
