//! Model catalog tools.
//!
//! Two independent pipelines over a priced model listing:
//!
//! - [`CatalogFetcher`] - download the catalog (or fall back to a local
//!   snapshot), drop entries without positive prompt/completion pricing,
//!   write `models.json`, and stamp `script_metadata.json`
//! - [`rank`] - load `models.json` and list the cheapest models by
//!   prompt + completion price
//!
//! # Example
//!
//! ```rust,no_run
//! use model_catalog::{rank, CatalogConfig, CatalogFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), model_catalog::CatalogError> {
//!     let config = CatalogConfig::default();
//!     let output = config.output_path.clone();
//!     CatalogFetcher::new(config)?.fetch_and_filter().await?;
//!
//!     for model in rank(&output, 20)? {
//!         println!("{}", model);
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod fetch;
mod filter;
mod metadata;
mod rank;
mod types;

#[cfg(test)]
mod test_support;

pub use config::{
    CatalogConfig, DEFAULT_CATALOG_URL, DEFAULT_FALLBACK_FILE, DEFAULT_METADATA_FILE,
    DEFAULT_OUTPUT_FILE, DEFAULT_RANK_LIMIT,
};
pub use error::CatalogError;
pub use fetch::{CatalogFetcher, CatalogSource, FilterReport};
pub use filter::{filter_priced, is_priced, FilterOutcome};
pub use metadata::{format_timestamp, touch_run_metadata, RunMetadata};
pub use rank::{rank, rank_models, RankedModel};
pub use types::{parse_price, CatalogResponse, ModelEntry, ModelList, UNKNOWN_ID};
