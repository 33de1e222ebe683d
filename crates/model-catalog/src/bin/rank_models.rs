use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rank-models")]
#[command(about = "List the cheapest models by prompt + completion price")]
struct Args {
    /// Filtered catalog to rank
    #[arg(long, default_value = model_catalog::DEFAULT_OUTPUT_FILE)]
    input: PathBuf,

    /// Number of models to show
    #[arg(long, default_value_t = model_catalog::DEFAULT_RANK_LIMIT)]
    limit: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let ranked = model_catalog::rank(&args.input, args.limit)?;

    println!(
        "Top {} models sorted by prompt + completion pricing:",
        args.limit
    );
    for model in ranked {
        println!("{}", model);
    }
    Ok(())
}
