//! Remote catalog retrieval with a static fallback.

use chrono::{Local, NaiveDateTime};
use flat_store::JsonDocument;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::filter::filter_priced;
use crate::metadata::touch_run_metadata;
use crate::types::{CatalogResponse, ModelList};

/// Where a catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    Fallback,
}

/// Summary of a fetch-and-filter run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    pub source: CatalogSource,
    pub kept: usize,
    pub dropped: Vec<String>,
    pub last_run_timestamp: String,
}

/// Fetches the model catalog and writes the priced subset.
pub struct CatalogFetcher {
    client: Client,
    config: CatalogConfig,
}

impl CatalogFetcher {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent("routstr-model-catalog/0.1")
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                CatalogError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetch the remote catalog, falling back to the snapshot on any failure.
    pub async fn fetch(&self) -> Result<(CatalogResponse, CatalogSource), CatalogError> {
        match self.fetch_remote().await {
            Ok(catalog) => Ok((catalog, CatalogSource::Remote)),
            Err(err) => {
                warn!(url = %self.config.url, error = %err, "Error fetching catalog");
                let catalog = self.load_fallback()?;
                info!(
                    path = %self.config.fallback_path.display(),
                    "Using fallback catalog due to API error"
                );
                Ok((catalog, CatalogSource::Fallback))
            }
        }
    }

    async fn fetch_remote(&self) -> Result<CatalogResponse, CatalogError> {
        debug!("Fetching model catalog from: {}", self.config.url);

        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    fn load_fallback(&self) -> Result<CatalogResponse, CatalogError> {
        let path = &self.config.fallback_path;
        JsonDocument::new(path)
            .load()?
            .ok_or_else(|| CatalogError::MissingFallback(path.clone()))
    }

    /// Fetch, keep only priced entries, stamp the metadata file, and write
    /// `{"models": [...]}` to the output path.
    ///
    /// Nothing is written if no catalog could be obtained.
    pub async fn fetch_and_filter(&self) -> Result<FilterReport, CatalogError> {
        self.fetch_and_filter_at(Local::now().naive_local()).await
    }

    async fn fetch_and_filter_at(&self, now: NaiveDateTime) -> Result<FilterReport, CatalogError> {
        let (catalog, source) = self.fetch().await?;
        let total = catalog.data.len();
        let outcome = filter_priced(catalog.data);

        let metadata = touch_run_metadata(&self.config.metadata_path, now)?;

        let kept = outcome.kept.len();
        JsonDocument::new(&self.config.output_path).save(&ModelList {
            models: outcome.kept,
        })?;

        info!(
            path = %self.config.output_path.display(),
            total,
            kept,
            dropped = outcome.dropped.len(),
            "Filtered models written"
        );

        Ok(FilterReport {
            source,
            kept,
            dropped: outcome.dropped,
            last_run_timestamp: metadata.last_run_timestamp,
        })
    }
}
