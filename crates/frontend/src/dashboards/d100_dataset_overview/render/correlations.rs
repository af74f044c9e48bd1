use super::{section, ROW_HEAD_CLASS, TH_CLASS};
use crate::shared::html::html_escape;
use crate::shared::number_format::{format_optional, EMPTY_CELL};
use contracts::dashboards::d100_dataset_overview::{
    CorrelationPair, CorrelationTier, CorrelationsPayload, PairStrength,
};
use std::fmt::Write;

fn tier_class(tier: CorrelationTier) -> &'static str {
    match tier {
        CorrelationTier::Strong => "text-green-600",
        CorrelationTier::Moderate => "text-blue-600",
        CorrelationTier::Weak => "text-yellow-600",
        CorrelationTier::Negligible => "text-gray-600",
    }
}

fn tier_key(tier: CorrelationTier) -> &'static str {
    match tier {
        CorrelationTier::Strong => "strong",
        CorrelationTier::Moderate => "moderate",
        CorrelationTier::Weak => "weak",
        CorrelationTier::Negligible => "negligible",
    }
}

fn pair_strength_class(strength: PairStrength) -> &'static str {
    match strength {
        PairStrength::Strong => "text-red-600",
        PairStrength::Moderate => "text-orange-600",
        PairStrength::Weak => "text-yellow-600",
    }
}

/// Correlations tab: coloured matrix and the ranked list of significant pairs
pub fn render_correlations(payload: &CorrelationsPayload) -> String {
    let mut body = String::new();

    if payload.correlation_matrix.is_some() {
        body.push_str(&matrix_table(payload));
    }

    let pairs = payload.ranked_pairs();
    if !pairs.is_empty() {
        body.push_str(
            r#"<div class="bg-white rounded-lg shadow p-6"><h4 class="text-md font-semibold text-gray-700 mb-4">Corrélations significatives</h4><div class="space-y-3">"#,
        );
        for pair in pairs {
            body.push_str(&pair_row(pair));
        }
        body.push_str("</div></div>");
    }

    section(
        "fa-project-diagram",
        "text-green-600",
        "Matrice de corrélations",
        &body,
    )
}

fn matrix_table(payload: &CorrelationsPayload) -> String {
    let rows = payload.row_variables();
    let columns = payload.column_variables();
    let mut html = String::from(
        r#"<div class="bg-white rounded-lg shadow p-6 mb-6"><div class="overflow-x-auto"><table class="min-w-full table-auto correlation-matrix"><thead class="bg-gray-50"><tr>"#,
    );

    let _ = write!(html, r#"<th class="{TH_CLASS}">Variable</th>"#);
    for col in &columns {
        let _ = write!(html, r#"<th class="{TH_CLASS}">{}</th>"#, html_escape(col));
    }
    html.push_str(r#"</tr></thead><tbody class="divide-y divide-gray-200">"#);

    for row in &rows {
        let _ = write!(
            html,
            r#"<tr class="hover:bg-gray-50"><td class="{ROW_HEAD_CLASS}">{}</td>"#,
            html_escape(row)
        );
        for col in &columns {
            match payload.coefficient(row, col) {
                Some(value) => {
                    let tier = CorrelationTier::from_coefficient(value);
                    let _ = write!(
                        html,
                        r#"<td class="px-4 py-2 text-sm {} font-medium" data-tier="{}">{}</td>"#,
                        tier_class(tier),
                        tier_key(tier),
                        format_optional(Some(value))
                    );
                }
                None => {
                    let _ = write!(
                        html,
                        r#"<td class="px-4 py-2 text-sm text-gray-400">{EMPTY_CELL}</td>"#
                    );
                }
            }
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div></div>");
    html
}

fn pair_row(pair: &CorrelationPair) -> String {
    let glyph = if pair.is_positive() { "↗" } else { "↘" };
    format!(
        r#"<div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg"><div><span class="font-medium text-gray-800">{}</span><span class="text-gray-500 mx-2">×</span><span class="font-medium text-gray-800">{}</span></div><div class="flex items-center space-x-3"><span class="text-sm {} font-medium">{}</span><span class="text-sm text-gray-600">{}</span><span class="font-semibold text-gray-800">{}</span></div></div>"#,
        html_escape(&pair.variable1),
        html_escape(&pair.variable2),
        pair_strength_class(pair.strength_level()),
        html_escape(&pair.strength),
        glyph,
        format_optional(pair.correlation)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> CorrelationsPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_symmetric_strong_cells() {
        let html = render_correlations(&payload(
            r#"{"correlation_matrix": {"A": {"B": 0.72}, "B": {"A": 0.72}}}"#,
        ));
        assert_eq!(html.matches(r#"data-tier="strong""#).count(), 2);
        assert_eq!(html.matches(r#"text-green-600 font-medium" data-tier="strong">0.72<"#).count(), 2);
        // diagonal is absent from the payload
        assert_eq!(html.matches(">--<").count(), 2);
    }

    #[test]
    fn test_tier_classes_per_value() {
        let html = render_correlations(&payload(
            r#"{"correlation_matrix": {"A": {"A": 1.0, "B": 0.55, "C": 0.31, "D": -0.8}}}"#,
        ));
        assert!(html.contains(r#"data-tier="strong">1.00<"#));
        assert!(html.contains(r#"text-blue-600 font-medium" data-tier="moderate">0.55<"#));
        assert!(html.contains(r#"text-yellow-600 font-medium" data-tier="weak">0.31<"#));
        assert!(html.contains(r#"text-gray-600 font-medium" data-tier="negligible">-0.80<"#));
    }

    #[test]
    fn test_pairs_ranked_with_glyphs() {
        let html = render_correlations(&payload(
            r#"{"correlation_pairs": [
                {"variable1": "age", "variable2": "income", "strength": "modérée", "direction": "positive", "correlation": 0.55},
                {"variable1": "price", "variable2": "sales", "strength": "forte", "direction": "negative", "correlation": -0.91}
            ]}"#,
        ));
        assert!(!html.contains("<table"));
        let price = html.find(">price<").unwrap();
        let age = html.find(">age<").unwrap();
        assert!(price < age, "strongest pair first");
        assert!(html.contains(r#"text-red-600 font-medium">forte<"#));
        assert!(html.contains(r#"text-orange-600 font-medium">modérée<"#));
        assert!(html.contains("↘"));
        assert!(html.contains("↗"));
        assert!(html.contains(">-0.91<"));
    }

    #[test]
    fn test_empty_payload() {
        let html = render_correlations(&payload("{}"));
        assert!(html.contains("Matrice de corrélations"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("Corrélations significatives"));
    }
}
