use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    /// The source text is not valid JSON. Raised before the engine runs.
    #[error("failed to parse `{name}` as JSON: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk `{}`: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("diff error: {0}")]
    Diff(#[from] jsoncmp_diff::DiffError),
}

pub type SdkResult<T> = Result<T, SdkError>;
