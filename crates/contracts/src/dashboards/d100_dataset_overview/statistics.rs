use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `GET /dataset/{id}/statistics/?column={name}`
///
/// Every block is optional; the backend omits what it could not compute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticsPayload {
    /// `{field: {stat: value}}`, the shape of a pandas `describe().to_dict()`
    pub descriptive_stats: Option<Map<String, Value>>,
    /// `{stat: value}` for the selected column only
    pub column_stats: Option<Map<String, Value>>,
    /// Column the `column_stats` block was computed for
    pub selected_column: Option<String>,
}

impl StatisticsPayload {
    /// Dataset fields in backend order
    pub fn fields(&self) -> Vec<&str> {
        self.descriptive_stats
            .as_ref()
            .map(|stats| stats.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Statistic names across all fields, in first-seen order.
    ///
    /// Categorical fields carry `unique/top/freq` where numeric ones carry
    /// `mean/std/...`, so the union is needed to build a rectangular table.
    pub fn stat_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let Some(stats) = &self.descriptive_stats else {
            return names;
        };
        for per_field in stats.values().filter_map(Value::as_object) {
            for name in per_field.keys() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Value of `stat` for `field`, `None` when the backend did not report it
    pub fn descriptive_value(&self, field: &str, stat: &str) -> Option<&Value> {
        self.descriptive_stats
            .as_ref()?
            .get(field)?
            .as_object()?
            .get(stat)
    }
}
