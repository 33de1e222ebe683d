//! Configuration for the catalog tools.

use std::path::PathBuf;
use std::time::Duration;

/// Public OpenRouter model listing.
pub const DEFAULT_CATALOG_URL: &str = "https://openrouter.ai/api/v1/models";

/// Filtered catalog written by the fetcher and read by the ranker.
pub const DEFAULT_OUTPUT_FILE: &str = "models.json";

/// Static snapshot used when the remote catalog is unavailable.
pub const DEFAULT_FALLBACK_FILE: &str = "models.example.json";

/// Side record holding the time of the last fetch.
pub const DEFAULT_METADATA_FILE: &str = "script_metadata.json";

/// Number of entries reported by the ranker.
pub const DEFAULT_RANK_LIMIT: usize = 20;

/// Configuration for [`CatalogFetcher`](crate::CatalogFetcher).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog endpoint.
    pub url: String,

    /// Upper bound on the whole HTTP request.
    pub timeout: Duration,

    /// Where the filtered catalog is written.
    pub output_path: PathBuf,

    /// Snapshot in the remote response format (`{"data": [...]}`).
    pub fallback_path: PathBuf,

    /// Run metadata file.
    pub metadata_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            timeout: Duration::from_secs(30),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fallback_path: PathBuf::from(DEFAULT_FALLBACK_FILE),
            metadata_path: PathBuf::from(DEFAULT_METADATA_FILE),
        }
    }
}
