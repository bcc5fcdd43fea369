//! Error types for the diff crate.

/// Errors that can occur during a bounded comparison.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// Object or array nesting exceeded the configured limit.
    #[error("nesting at `{path}` exceeds the maximum depth of {limit}")]
    DepthExceeded { path: String, limit: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
