//! Start-up configuration read from the host page
//!
//! The server-rendered page embeds one mount element:
//!
//! ```html
//! <div id="dataset-overview"
//!      data-dataset-id="42"
//!      data-dataset-name="sales.csv"
//!      data-api-base=""
//!      data-columns='["age", "city"]'></div>
//! ```

use contracts::dashboards::d100_dataset_overview::DatasetRef;
use thiserror::Error;

/// Id of the element the dashboard mounts into
pub const MOUNT_ELEMENT_ID: &str = "dataset-overview";

const ATTR_DATASET_ID: &str = "data-dataset-id";
const ATTR_DATASET_NAME: &str = "data-dataset-name";
const ATTR_API_BASE: &str = "data-api-base";
const ATTR_COLUMNS: &str = "data-columns";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mount element #{0} not found")]
    MissingMountElement(&'static str),

    #[error("attribute {0} is missing or empty")]
    MissingAttribute(&'static str),

    #[error("attribute data-columns is not a JSON array of strings: {0}")]
    InvalidColumns(#[from] serde_json::Error),
}

/// Everything the dashboard needs from the host page
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub dataset: DatasetRef,
    /// Prefix for API URLs, empty for same-origin relative URLs
    pub api_base: String,
    /// Column names offered by the statistics column selector
    pub columns: Vec<String>,
}

impl HostConfig {
    /// Parse from an attribute getter (the DOM element in production)
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let id = get(ATTR_DATASET_ID)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingAttribute(ATTR_DATASET_ID))?;

        let name = get(ATTR_DATASET_NAME).filter(|v| !v.trim().is_empty());
        let api_base = get(ATTR_API_BASE).unwrap_or_default();

        let columns = match get(ATTR_COLUMNS) {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str::<Vec<String>>(&raw)?,
            _ => Vec::new(),
        };

        Ok(Self {
            dataset: DatasetRef::new(id, name),
            api_base,
            columns,
        })
    }

    pub fn from_element(element: &web_sys::Element) -> Result<Self, ConfigError> {
        Self::from_attributes(|name| element.get_attribute(name))
    }
}

/// Locate the mount element in the current document
pub fn mount_element() -> Result<web_sys::Element, ConfigError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
        .ok_or(ConfigError::MissingMountElement(MOUNT_ELEMENT_ID))
}
