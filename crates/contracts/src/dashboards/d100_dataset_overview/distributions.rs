use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `GET /dataset/{id}/distributions/`
///
/// Charts are rendered server-side and delivered as base64 PNG strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributionsPayload {
    /// `{column: {histogram: base64png}}`
    pub numeric_distributions: Option<Map<String, Value>>,
    /// `{column: {bar_chart: base64png}}`
    pub categorical_distributions: Option<Map<String, Value>>,
}

/// One pre-rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartImage<'a> {
    pub column: &'a str,
    pub png_base64: &'a str,
}

impl DistributionsPayload {
    pub fn has_numeric(&self) -> bool {
        self.numeric_distributions
            .as_ref()
            .is_some_and(|m| !m.is_empty())
    }

    pub fn has_categorical(&self) -> bool {
        self.categorical_distributions
            .as_ref()
            .is_some_and(|m| !m.is_empty())
    }

    /// Histograms of numeric columns; columns without an image are skipped
    pub fn histograms(&self) -> Vec<ChartImage<'_>> {
        charts(self.numeric_distributions.as_ref(), "histogram")
    }

    /// Bar charts of categorical columns; columns without an image are skipped
    pub fn bar_charts(&self) -> Vec<ChartImage<'_>> {
        charts(self.categorical_distributions.as_ref(), "bar_chart")
    }
}

fn charts<'a>(block: Option<&'a Map<String, Value>>, image_key: &str) -> Vec<ChartImage<'a>> {
    let Some(block) = block else {
        return Vec::new();
    };
    block
        .iter()
        .filter_map(|(column, entry)| {
            let png_base64 = entry.get(image_key)?.as_str()?;
            if png_base64.is_empty() {
                return None;
            }
            Some(ChartImage {
                column: column.as_str(),
                png_base64,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_has_no_charts() {
        let p: DistributionsPayload = serde_json::from_str("{}").unwrap();
        assert!(!p.has_numeric());
        assert!(!p.has_categorical());
        assert!(p.histograms().is_empty());
        assert!(p.bar_charts().is_empty());
    }

    #[test]
    fn test_entries_without_image_are_skipped() {
        let p: DistributionsPayload = serde_json::from_str(
            r#"{
                "numeric_distributions": {
                    "age": {"histogram": "iVBORw0KGgo="},
                    "income": {"stats": {"mean": 3}},
                    "weight": {"histogram": ""}
                },
                "categorical_distributions": {"city": {"bar_chart": "AAAA"}}
            }"#,
        )
        .unwrap();

        assert!(p.has_numeric());
        assert_eq!(
            p.histograms(),
            vec![ChartImage {
                column: "age",
                png_base64: "iVBORw0KGgo="
            }]
        );
        assert_eq!(p.bar_charts().len(), 1);
        assert_eq!(p.bar_charts()[0].column, "city");
    }

    #[test]
    fn test_empty_block_counts_as_absent() {
        let p: DistributionsPayload =
            serde_json::from_str(r#"{"numeric_distributions": {}}"#).unwrap();
        assert!(!p.has_numeric());
    }
}
