use thiserror::Error;

/// Errors from report encoding and decoding.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
