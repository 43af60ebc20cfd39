/// Error types for the wastewater core
use thiserror::Error;

/// Main error type for loading, transforming and summarizing wastewater data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WastewaterError {
    /// Transport failure or non-2xx response while fetching the dataset
    #[error("Network request failed: {0}")]
    Network(String),

    /// Response body does not match the raw dataset schema
    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    /// Raw series key or display label missing from the watershed registry
    #[error("Unknown series: {0}")]
    UnknownSeries(String),

    /// Primary series has no non-null value at any index
    #[error("No data available for series {0}")]
    NoData(String),

    /// The comparison row for the trend is missing or null
    #[error("Insufficient history for trend (latest index: {latest_index}, needed {window} earlier rows)")]
    InsufficientHistory { latest_index: usize, window: usize },

    /// Registry table is malformed
    #[error("Invalid watershed registry: {0}")]
    InvalidRegistry(String),
}

impl WastewaterError {
    /// Whether this failure leaves the dashboard in its loading state rather
    /// than reporting the summary as unavailable.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, WastewaterError::Network(_) | WastewaterError::Parse(_))
    }
}

impl From<serde_json::Error> for WastewaterError {
    fn from(e: serde_json::Error) -> Self {
        WastewaterError::Parse(e.to_string())
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for WastewaterError {
    fn from(e: reqwest::Error) -> Self {
        WastewaterError::Network(e.to_string())
    }
}

/// Type alias for Results using WastewaterError
pub type Result<T> = std::result::Result<T, WastewaterError>;
