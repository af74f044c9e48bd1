use super::{section, ROW_HEAD_CLASS, TH_CLASS};
use crate::shared::html::html_escape;
use crate::shared::number_format::format_value;
use contracts::dashboards::d100_dataset_overview::StatisticsPayload;
use std::fmt::Write;

/// Statistics tab: general table (stat names x fields) and the selected-column grid
pub fn render_statistics(payload: &StatisticsPayload) -> String {
    let mut body = String::new();

    if payload.descriptive_stats.is_some() {
        body.push_str(&descriptive_table(payload));
    }

    if let Some(column_stats) = &payload.column_stats {
        let column = payload.selected_column.as_deref().unwrap_or_default();
        let _ = write!(
            body,
            r#"<div class="bg-white rounded-lg shadow p-6"><h4 class="text-md font-semibold text-gray-700 mb-4">Statistiques détaillées - {}</h4><div class="grid grid-cols-2 md:grid-cols-4 gap-4">"#,
            html_escape(column)
        );
        for (stat, value) in column_stats {
            let _ = write!(
                body,
                r#"<div class="bg-gray-50 rounded p-3"><p class="text-xs text-gray-500 uppercase font-medium">{}</p><p class="text-lg font-semibold text-gray-800">{}</p></div>"#,
                html_escape(stat),
                html_escape(&format_value(Some(value)))
            );
        }
        body.push_str("</div></div>");
    }

    section(
        "fa-calculator",
        "text-blue-600",
        "Statistiques descriptives",
        &body,
    )
}

fn descriptive_table(payload: &StatisticsPayload) -> String {
    let fields = payload.fields();
    let mut html = String::from(
        r#"<div class="bg-white rounded-lg shadow p-6 mb-6"><h4 class="text-md font-semibold text-gray-700 mb-4">Statistiques générales</h4><div class="overflow-x-auto"><table class="min-w-full table-auto"><thead class="bg-gray-50"><tr>"#,
    );

    let _ = write!(html, r#"<th class="{TH_CLASS}">Statistique</th>"#);
    for field in &fields {
        let _ = write!(html, r#"<th class="{TH_CLASS}">{}</th>"#, html_escape(field));
    }
    html.push_str(r#"</tr></thead><tbody class="divide-y divide-gray-200">"#);

    for stat in payload.stat_names() {
        let _ = write!(
            html,
            r#"<tr class="hover:bg-gray-50"><td class="{ROW_HEAD_CLASS}">{}</td>"#,
            html_escape(stat)
        );
        for field in &fields {
            let cell = format_value(payload.descriptive_value(field, stat));
            let _ = write!(
                html,
                r#"<td class="px-4 py-2 text-sm text-gray-600">{}</td>"#,
                html_escape(&cell)
            );
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div></div>");
    html
}
