use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `GET /dataset/{id}/correlations/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationsPayload {
    /// `{row: {col: coefficient}}`
    pub correlation_matrix: Option<Map<String, Value>>,
    /// Pairs the backend considers significant
    pub correlation_pairs: Option<Vec<CorrelationPair>>,
}

/// A pair of variables with a notable correlation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    #[serde(default)]
    pub variable1: String,
    #[serde(default)]
    pub variable2: String,
    /// Backend label: "forte", "modérée", "faible" (or the English words)
    #[serde(default)]
    pub strength: String,
    /// "positive" or "negative"
    #[serde(default)]
    pub direction: String,
    pub correlation: Option<f64>,
}

impl CorrelationPair {
    /// Direction label wins; the coefficient sign is used when the label is missing
    pub fn is_positive(&self) -> bool {
        match self.direction.as_str() {
            "positive" => true,
            "negative" => false,
            _ => self.correlation.is_some_and(|c| c > 0.0),
        }
    }

    pub fn strength_level(&self) -> PairStrength {
        PairStrength::from_label(&self.strength)
    }
}

/// Strength buckets of significant pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairStrength {
    Strong,
    Moderate,
    Weak,
}

impl PairStrength {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "forte" | "fort" | "strong" => PairStrength::Strong,
            "modérée" | "moderee" | "modéré" | "moderate" => PairStrength::Moderate,
            _ => PairStrength::Weak,
        }
    }
}

/// Colour tier of a matrix cell, compared on the signed coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationTier {
    /// `>= 0.7`
    Strong,
    /// `>= 0.5`
    Moderate,
    /// `>= 0.3`
    Weak,
    Negligible,
}

impl CorrelationTier {
    pub fn from_coefficient(value: f64) -> Self {
        if value >= 0.7 {
            CorrelationTier::Strong
        } else if value >= 0.5 {
            CorrelationTier::Moderate
        } else if value >= 0.3 {
            CorrelationTier::Weak
        } else {
            CorrelationTier::Negligible
        }
    }
}

impl CorrelationsPayload {
    /// Row variables in backend order
    pub fn row_variables(&self) -> Vec<&str> {
        self.correlation_matrix
            .as_ref()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Column variables: the row variables, then any inner key missing from
    /// them in first-seen order. Equal to [`Self::row_variables`] for a square matrix.
    pub fn column_variables(&self) -> Vec<&str> {
        let mut columns = self.row_variables();
        let Some(matrix) = &self.correlation_matrix else {
            return columns;
        };
        for row in matrix.values().filter_map(Value::as_object) {
            for col in row.keys() {
                if !columns.contains(&col.as_str()) {
                    columns.push(col);
                }
            }
        }
        columns
    }

    pub fn coefficient(&self, row: &str, col: &str) -> Option<f64> {
        self.correlation_matrix
            .as_ref()?
            .get(row)?
            .as_object()?
            .get(col)?
            .as_f64()
    }

    /// Significant pairs by absolute coefficient, strongest first.
    /// Pairs without a coefficient go last; ties keep backend order.
    pub fn ranked_pairs(&self) -> Vec<&CorrelationPair> {
        let mut pairs: Vec<&CorrelationPair> = self
            .correlation_pairs
            .as_deref()
            .unwrap_or_default()
            .iter()
            .collect();
        pairs.sort_by(|a, b| {
            let a = a.correlation.map(f64::abs).unwrap_or(f64::NEG_INFINITY);
            let b = b.correlation.map(f64::abs).unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        });
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(v1: &str, v2: &str, correlation: Option<f64>) -> CorrelationPair {
        CorrelationPair {
            variable1: v1.to_string(),
            variable2: v2.to_string(),
            strength: String::new(),
            direction: String::new(),
            correlation,
        }
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(CorrelationTier::from_coefficient(1.0), CorrelationTier::Strong);
        assert_eq!(CorrelationTier::from_coefficient(0.7), CorrelationTier::Strong);
        assert_eq!(CorrelationTier::from_coefficient(0.69), CorrelationTier::Moderate);
        assert_eq!(CorrelationTier::from_coefficient(0.5), CorrelationTier::Moderate);
        assert_eq!(CorrelationTier::from_coefficient(0.3), CorrelationTier::Weak);
        assert_eq!(CorrelationTier::from_coefficient(0.29), CorrelationTier::Negligible);
        assert_eq!(CorrelationTier::from_coefficient(-0.9), CorrelationTier::Negligible);
    }

    #[test]
    fn test_symmetric_matrix_lookup() {
        let p: CorrelationsPayload = serde_json::from_str(
            r#"{"correlation_matrix": {"A": {"B": 0.72}, "B": {"A": 0.72}}}"#,
        )
        .unwrap();
        assert_eq!(p.row_variables(), vec!["A", "B"]);
        assert_eq!(p.column_variables(), vec!["A", "B"]);
        assert_eq!(p.coefficient("A", "B"), Some(0.72));
        assert_eq!(p.coefficient("B", "A"), Some(0.72));
        assert_eq!(p.coefficient("A", "A"), None);
    }

    #[test]
    fn test_rectangular_matrix_columns() {
        let p: CorrelationsPayload = serde_json::from_str(
            r#"{"correlation_matrix": {"A": {"A": 1.0, "B": 0.5}, "C": {"D": 0.1}}}"#,
        )
        .unwrap();
        assert_eq!(p.row_variables(), vec!["A", "C"]);
        assert_eq!(p.column_variables(), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_ranked_pairs_by_absolute_value() {
        let p = CorrelationsPayload {
            correlation_matrix: None,
            correlation_pairs: Some(vec![
                pair("a", "b", Some(0.4)),
                pair("c", "d", None),
                pair("e", "f", Some(-0.9)),
                pair("g", "h", Some(0.4)),
            ]),
        };
        let ranked: Vec<&str> = p.ranked_pairs().iter().map(|p| p.variable1.as_str()).collect();
        assert_eq!(ranked, vec!["e", "a", "g", "c"]);
    }

    #[test]
    fn test_direction_and_strength_labels() {
        let mut p = pair("a", "b", Some(-0.5));
        assert!(!p.is_positive());
        p.direction = "positive".to_string();
        assert!(p.is_positive());

        p.strength = "Forte".to_string();
        assert_eq!(p.strength_level(), PairStrength::Strong);
        p.strength = "modérée".to_string();
        assert_eq!(p.strength_level(), PairStrength::Moderate);
        p.strength = "faible".to_string();
        assert_eq!(p.strength_level(), PairStrength::Weak);
    }

    #[test]
    fn test_pair_defaults_for_missing_labels() {
        let p: CorrelationsPayload = serde_json::from_str(
            r#"{"correlation_pairs": [{"variable1": "x", "variable2": "y", "correlation": 0.8}]}"#,
        )
        .unwrap();
        let pairs = p.ranked_pairs();
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].is_positive());
        assert_eq!(pairs[0].strength_level(), PairStrength::Weak);
    }

    #[test]
    fn test_pair_without_variables_keeps_payload() {
        let p: CorrelationsPayload = serde_json::from_str(
            r#"{
                "correlation_matrix": {"A": {"B": 0.9}},
                "correlation_pairs": [
                    {"variable2": "y", "correlation": 0.4},
                    {"variable1": "a", "variable2": "b", "correlation": 0.9}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(p.coefficient("A", "B"), Some(0.9));
        let pairs = p.ranked_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].variable1, "a");
        assert_eq!(pairs[1].variable1, "");
        assert_eq!(pairs[1].variable2, "y");
    }
}
