use super::section;
use crate::shared::html::html_escape;
use contracts::dashboards::d100_dataset_overview::{ChartImage, DistributionsPayload};
use std::fmt::Write;

/// Distributions tab: histogram gallery and bar chart gallery.
/// A gallery is emitted only when its block has entries.
pub fn render_distributions(payload: &DistributionsPayload) -> String {
    let mut body = String::new();

    if payload.has_numeric() {
        body.push_str(&gallery(
            "mb-8",
            "fa-hashtag",
            "text-blue-600",
            "Variables numériques",
            "Histogramme",
            &payload.histograms(),
        ));
    }

    if payload.has_categorical() {
        body.push_str(&gallery(
            "",
            "fa-tags",
            "text-purple-600",
            "Variables catégorielles",
            "Graphique en barres",
            &payload.bar_charts(),
        ));
    }

    section(
        "fa-chart-bar",
        "text-purple-600",
        "Distributions des variables",
        &body,
    )
}

fn gallery(
    wrapper_class: &str,
    icon: &str,
    icon_color: &str,
    title: &str,
    alt_prefix: &str,
    charts: &[ChartImage<'_>],
) -> String {
    let mut html = format!(
        r#"<div class="gallery {wrapper_class}"><h4 class="text-md font-semibold text-gray-700 mb-4 flex items-center"><i class="fas {icon} mr-2 {icon_color}"></i>{title}</h4><div class="grid grid-cols-1 lg:grid-cols-2 gap-6">"#
    );
    for chart in charts {
        let column = html_escape(chart.column);
        let _ = write!(
            html,
            r#"<div class="bg-white rounded-lg shadow p-4"><h5 class="font-medium text-gray-800 mb-3">{column}</h5><img src="data:image/png;base64,{}" alt="{alt_prefix} {column}" class="w-full h-auto"></div>"#,
            html_escape(chart.png_base64)
        );
    }
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_blocks_render_no_gallery() {
        let payload: DistributionsPayload = serde_json::from_str("{}").unwrap();
        let html = render_distributions(&payload);
        assert!(html.contains("Distributions des variables"));
        assert!(!html.contains("gallery"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_both_galleries() {
        let payload: DistributionsPayload = serde_json::from_str(
            r#"{
                "numeric_distributions": {"age": {"histogram": "QUJD"}, "skip": {}},
                "categorical_distributions": {"city": {"bar_chart": "REVG"}}
            }"#,
        )
        .unwrap();
        let html = render_distributions(&payload);

        assert_eq!(html.matches(r#"<div class="gallery"#).count(), 2);
        assert_eq!(html.matches("<img").count(), 2);
        assert!(html.contains(r#"src="data:image/png;base64,QUJD" alt="Histogramme age""#));
        assert!(html.contains(r#"src="data:image/png;base64,REVG" alt="Graphique en barres city""#));
        assert!(html.find("Variables numériques").unwrap() < html.find("Variables catégorielles").unwrap());
    }

    #[test]
    fn test_only_categorical() {
        let payload: DistributionsPayload = serde_json::from_str(
            r#"{"numeric_distributions": {}, "categorical_distributions": {"city": {"bar_chart": "REVG"}}}"#,
        )
        .unwrap();
        let html = render_distributions(&payload);
        assert!(!html.contains("Variables numériques"));
        assert!(html.contains("Variables catégorielles"));
    }
}
