//! Routstr status bot.
//!
//! Each run makes a single pass:
//!
//! 1. Look up the bot's most recent note on its relays
//! 2. Probe the Routstr API with a chat completion about that note
//! 3. Compose a status note (generated commentary + fixed status line)
//! 4. Publish it, quoting the previous note
//! 5. Record the status and the new event id in `routstr_status.json`
//!
//! Relay and API failures degrade the run instead of aborting it: no
//! previous note means no quote, and an unreachable API means `down`. A
//! missing or malformed signing key stops the bot before any network call.
//!
//! # Usage
//!
//! ```rust,no_run
//! use nostr_relay::NostrRelayClient;
//! use status_bot::{BotConfig, HttpApiProbe, StatusBot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), status_bot::BotError> {
//!     let config = BotConfig::from_env()?;
//!     let relay = NostrRelayClient::new(config.relay.clone(), config.keys.clone());
//!     let probe = HttpApiProbe::new(&config)?;
//!
//!     let report = StatusBot::new(config, relay, probe).run().await?;
//!     println!("published {} ({})", report.published.event_id, report.status);
//!     Ok(())
//! }
//! ```

mod api_types;
mod compose;
mod config;
mod error;
mod probe;
mod workflow;

#[cfg(test)]
mod test_support;

pub use api_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use compose::{build_prompt, compose_content, status_line, PLACEHOLDER_NOTE};
pub use config::{BotConfig, DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_PROBE_TIMEOUT_SECS};
pub use error::BotError;
pub use probe::{interpret_response, ApiProbe, HttpApiProbe, ProbeOutcome};
pub use workflow::{RunReport, StatusBot};

// Re-export shared types for convenience
pub use flat_store::{ServiceStatus, StatusRecord, StatusStore};
pub use nostr_relay::{NostrRelayClient, PublishResult, RelayClient, RelayConfig};
