//! Fetch client for `/dataset/{id}/{resource}/`
//!
//! Every failure (HTTP status, transport, body decoding) ends up as a
//! [`RequestError`]. No retries; timeouts are left to the browser.

use crate::shared::api_utils::{api_url, csrf_token};
use async_trait::async_trait;
use contracts::dashboards::d100_dataset_overview::{
    CorrelationsPayload, DatasetRef, DistributionsPayload, ResourceKind, StatisticsPayload,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Failed to load {resource}: HTTP {status}: {status_text}")]
    Status {
        resource: &'static str,
        status: u16,
        status_text: String,
    },

    #[error("Failed to load {resource}: {message}")]
    Network {
        resource: &'static str,
        message: String,
    },

    #[error("Failed to parse {resource}: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },
}

/// Source of the three per-dataset resources
#[async_trait(?Send)]
pub trait ResourceClient {
    /// `column` narrows the detailed block to one column; `None` for the whole dataset
    async fn load_statistics(
        &self,
        dataset: &DatasetRef,
        column: Option<&str>,
    ) -> Result<StatisticsPayload, RequestError>;

    async fn load_distributions(
        &self,
        dataset: &DatasetRef,
    ) -> Result<DistributionsPayload, RequestError>;

    async fn load_correlations(
        &self,
        dataset: &DatasetRef,
    ) -> Result<CorrelationsPayload, RequestError>;
}

/// Resource URL, with `?column=` for statistics when a column is selected.
/// The dataset id is percent-encoded as a path segment.
pub fn resource_url(
    base: &str,
    dataset: &DatasetRef,
    kind: ResourceKind,
    column: Option<&str>,
) -> String {
    let mut url = api_url(base, &kind.endpoint(&urlencoding::encode(&dataset.id)));
    if kind == ResourceKind::Statistics {
        if let Some(column) = column.filter(|c| !c.is_empty()) {
            url.push_str("?column=");
            url.push_str(&urlencoding::encode(column));
        }
    }
    url
}

/// Map a response status to an error for anything outside 2xx
pub fn check_status(kind: ResourceKind, status: u16, status_text: &str) -> Result<(), RequestError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(RequestError::Status {
        resource: kind.path_segment(),
        status,
        status_text: status_text.to_string(),
    })
}

/// [`ResourceClient`] over `gloo-net`, with the AJAX marker and CSRF headers
#[derive(Debug, Clone, Default)]
pub struct HttpResourceClient {
    base_url: String,
}

impl HttpResourceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        url: &str,
    ) -> Result<T, RequestError> {
        let resource = kind.path_segment();
        log::debug!("GET {}", url);

        let response = Request::get(url)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("X-CSRFToken", &csrf_token())
            .send()
            .await
            .map_err(|e| RequestError::Network {
                resource,
                message: e.to_string(),
            })?;

        check_status(kind, response.status(), &response.status_text())?;

        response.json::<T>().await.map_err(|e| RequestError::Decode {
            resource,
            message: e.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl ResourceClient for HttpResourceClient {
    async fn load_statistics(
        &self,
        dataset: &DatasetRef,
        column: Option<&str>,
    ) -> Result<StatisticsPayload, RequestError> {
        let kind = ResourceKind::Statistics;
        let url = resource_url(&self.base_url, dataset, kind, column);
        self.get_json(kind, &url).await
    }

    async fn load_distributions(
        &self,
        dataset: &DatasetRef,
    ) -> Result<DistributionsPayload, RequestError> {
        let kind = ResourceKind::Distributions;
        let url = resource_url(&self.base_url, dataset, kind, None);
        self.get_json(kind, &url).await
    }

    async fn load_correlations(
        &self,
        dataset: &DatasetRef,
    ) -> Result<CorrelationsPayload, RequestError> {
        let kind = ResourceKind::Correlations;
        let url = resource_url(&self.base_url, dataset, kind, None);
        self.get_json(kind, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> DatasetRef {
        DatasetRef::new("42", Some("sales.csv".to_string()))
    }

    #[test]
    fn test_statistics_url_with_column() {
        assert_eq!(
            resource_url("", &dataset(), ResourceKind::Statistics, Some("prix unitaire")),
            "/dataset/42/statistics/?column=prix%20unitaire"
        );
        assert_eq!(
            resource_url("", &dataset(), ResourceKind::Statistics, Some("a&b")),
            "/dataset/42/statistics/?column=a%26b"
        );
    }

    #[test]
    fn test_statistics_url_without_column() {
        assert_eq!(
            resource_url("", &dataset(), ResourceKind::Statistics, None),
            "/dataset/42/statistics/"
        );
        assert_eq!(
            resource_url("", &dataset(), ResourceKind::Statistics, Some("")),
            "/dataset/42/statistics/"
        );
    }

    #[test]
    fn test_column_is_ignored_for_other_resources() {
        assert_eq!(
            resource_url("http://localhost:8000", &dataset(), ResourceKind::Correlations, Some("age")),
            "http://localhost:8000/dataset/42/correlations/"
        );
    }

    #[test]
    fn test_dataset_id_is_encoded_in_path() {
        let dataset = DatasetRef::new("sales 2024/q1", None);
        assert_eq!(
            resource_url("", &dataset, ResourceKind::Distributions, None),
            "/dataset/sales%202024%2Fq1/distributions/"
        );
    }

    #[test]
    fn test_check_status_accepts_2xx() {
        assert!(check_status(ResourceKind::Statistics, 200, "OK").is_ok());
        assert!(check_status(ResourceKind::Statistics, 204, "No Content").is_ok());
    }

    #[test]
    fn test_http_500_message_contains_status() {
        let err = check_status(ResourceKind::Statistics, 500, "Internal Server Error").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("500"), "{}", message);
        assert!(message.contains("statistics"), "{}", message);
        assert_eq!(
            message,
            "Failed to load statistics: HTTP 500: Internal Server Error"
        );
    }

    #[test]
    fn test_redirect_and_client_errors_fail() {
        assert!(check_status(ResourceKind::Distributions, 302, "Found").is_err());
        assert!(matches!(
            check_status(ResourceKind::Correlations, 404, "Not Found"),
            Err(RequestError::Status { status: 404, .. })
        ));
    }
}
