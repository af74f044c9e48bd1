//! D100 Dataset overview: per-tab payloads served by `/dataset/{id}/{resource}/`.

pub mod correlations;
pub mod distributions;
pub mod statistics;

use serde::{Deserialize, Serialize};

pub use correlations::{CorrelationPair, CorrelationTier, CorrelationsPayload, PairStrength};
pub use distributions::{ChartImage, DistributionsPayload};
pub use statistics::StatisticsPayload;

/// Dataset the overview page was opened for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRef {
    /// Backend identifier, percent-encoded when placed in endpoint paths
    pub id: String,
    /// Display name (usually the uploaded file name)
    pub name: Option<String>,
}

impl DatasetRef {
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }

    /// Name for headings, falls back to the identifier
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }
}

/// Resource endpoints exposed per dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Statistics,
    Distributions,
    Correlations,
}

impl ResourceKind {
    /// Path segment after `/dataset/{id}/`
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Statistics => "statistics",
            ResourceKind::Distributions => "distributions",
            ResourceKind::Correlations => "correlations",
        }
    }

    /// Relative endpoint path, always with a trailing slash
    pub fn endpoint(self, dataset_id: &str) -> String {
        format!("/dataset/{}/{}/", dataset_id, self.path_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(
            ResourceKind::Statistics.endpoint("42"),
            "/dataset/42/statistics/"
        );
        assert_eq!(
            ResourceKind::Distributions.endpoint("42"),
            "/dataset/42/distributions/"
        );
        assert_eq!(
            ResourceKind::Correlations.endpoint("abc"),
            "/dataset/abc/correlations/"
        );
    }

    #[test]
    fn test_display_name_fallback() {
        let named = DatasetRef::new("7", Some("sales.csv".to_string()));
        assert_eq!(named.display_name(), "sales.csv");

        let unnamed = DatasetRef::new("7", None);
        assert_eq!(unnamed.display_name(), "7");

        let blank = DatasetRef::new("7", Some(String::new()));
        assert_eq!(blank.display_name(), "7");
    }
}
