//! Payload to HTML fragment renderers
//!
//! Pure functions; every interpolated string goes through `html_escape`.
//! Missing optional blocks render nothing instead of failing.

mod correlations;
mod distributions;
mod statistics;

pub use correlations::render_correlations;
pub use distributions::render_distributions;
pub use statistics::render_statistics;

/// Outer card of every tab, with an icon heading
fn section(icon: &str, icon_color: &str, title: &str, body: &str) -> String {
    format!(
        r#"<div class="bg-gray-50 rounded-lg p-6"><h3 class="text-lg font-semibold text-gray-800 mb-4 flex items-center"><i class="fas {icon} mr-2 {icon_color}"></i>{title}</h3>{body}</div>"#
    )
}

const TH_CLASS: &str = "px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase";
const ROW_HEAD_CLASS: &str = "px-4 py-2 font-medium text-gray-900";
