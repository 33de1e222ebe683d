use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use model_catalog::{CatalogConfig, CatalogFetcher, CatalogSource};

#[derive(Debug, Parser)]
#[command(name = "fetch-models")]
#[command(about = "Fetch the model catalog and keep only models with positive pricing")]
struct Args {
    /// Catalog endpoint
    #[arg(long, default_value = model_catalog::DEFAULT_CATALOG_URL)]
    url: String,

    /// Where to write the filtered catalog
    #[arg(long, default_value = model_catalog::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Snapshot used when the endpoint fails
    #[arg(long, default_value = model_catalog::DEFAULT_FALLBACK_FILE)]
    fallback: PathBuf,

    /// Run metadata file
    #[arg(long, default_value = model_catalog::DEFAULT_METADATA_FILE)]
    metadata: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let config = CatalogConfig {
        url: args.url,
        timeout: Duration::from_secs(args.timeout_secs),
        output_path: args.output,
        fallback_path: args.fallback,
        metadata_path: args.metadata,
    };

    let fetcher = CatalogFetcher::new(config)?;
    let report = fetcher.fetch_and_filter().await?;

    info!(
        kept = report.kept,
        dropped = report.dropped.len(),
        fallback = report.source == CatalogSource::Fallback,
        path = %fetcher.config().output_path.display(),
        "Filtered models successfully written"
    );
    Ok(())
}
