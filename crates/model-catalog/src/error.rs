//! Error types for catalog operations.

use std::path::PathBuf;

use flat_store::StoreError;
use thiserror::Error;

/// Errors that can occur while fetching, filtering, or ranking a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (transport, timeout, non-2xx, undecodable body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading or writing a JSON file failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The remote catalog failed and no fallback snapshot exists.
    #[error("fallback catalog not found at {0}")]
    MissingFallback(PathBuf),

    /// The ranking input file does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Client could not be constructed.
    #[error("configuration error: {0}")]
    Configuration(String),
}
