//! API utilities for frontend-backend communication
//!
//! URL building and the page-level pieces every request needs (CSRF token).

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Selector of the hidden input the host page renders with its CSRF token
pub const CSRF_FIELD_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

/// Build a full API URL from a base and an absolute path
///
/// An empty base keeps the URL relative to the current origin.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("http://host/", "/dataset/1/statistics/"), "http://host/dataset/1/statistics/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// CSRF token of the host page, empty string when the page has none
pub fn csrf_token() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(CSRF_FIELD_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Full page reload, the recovery action offered on load errors
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("", "/dataset/1/statistics/"), "/dataset/1/statistics/");
        assert_eq!(
            api_url("https://eda.example.com", "/dataset/1/statistics/"),
            "https://eda.example.com/dataset/1/statistics/"
        );
        assert_eq!(
            api_url("https://eda.example.com/", "/dataset/1/statistics/"),
            "https://eda.example.com/dataset/1/statistics/"
        );
    }
}
