//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a JSON document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error (open, write, rename, ...)
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document exists but is not valid JSON for the expected shape
    #[error("invalid json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Temp file could not be moved over the target
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// True when the document exists but could not be decoded.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Json { .. })
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
