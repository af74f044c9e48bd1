//! Helpers for assembling HTML fragments injected with `inner_html`

/// Simple HTML escape, safe for text nodes and quoted attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
