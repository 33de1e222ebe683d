use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use status_bot::{BotConfig, HttpApiProbe, NostrRelayClient, StatusBot};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Cannot start status bot");
            return Err(err.into());
        }
    };
    info!(
        api_url = %config.api_url,
        public_key = %config.public_key().to_hex(),
        relays = config.relay.relays().len(),
        "Starting Routstr status bot"
    );

    let relay = NostrRelayClient::new(config.relay.clone(), config.keys.clone());
    let probe = HttpApiProbe::new(&config)?;
    let bot = StatusBot::new(config, relay, probe);

    let report = bot.run().await?;
    info!(
        status = %report.status,
        changed = report.status_changed(),
        event_id = %report.published.event_id,
        relays_ok = report.published.success,
        relays_failed = report.published.failed,
        "Status run complete"
    );
    Ok(())
}
