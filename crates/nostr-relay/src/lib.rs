//! Nostr relay access for the status bot.
//!
//! A thin adapter over `nostr-sdk` with two operations:
//!
//! - [`RelayClient::fetch_latest`] - newest short text note by an author,
//!   gathered from every configured relay
//! - [`RelayClient::publish`] - sign and broadcast a short text note
//!
//! Connections are short-lived: each call connects to the primary and backup
//! relays, does its work, and disconnects. Failures never escape as errors;
//! they are logged and surface as `None`.
//!
//! # Example
//!
//! ```rust,ignore
//! use nostr_relay::{parse_keys, quote_tag, NostrRelayClient, RelayClient, RelayConfig};
//!
//! let keys = parse_keys("nsec1...")?;
//! let author = keys.public_key();
//! let config = RelayConfig::from_env();
//! let hint = config.relay_hint().to_string();
//! let client = NostrRelayClient::new(config, keys);
//!
//! let mut tags = Vec::new();
//! if let Some(previous) = client.fetch_latest(&author).await {
//!     tags.push(quote_tag(&previous, &hint));
//! }
//! let published = client.publish("still routing".to_string(), tags).await;
//! ```

mod client;
mod config;
mod error;
mod events;

pub use client::{NostrRelayClient, PublishResult, RelayClient};
pub use config::{
    parse_keys, parse_relays, RelayConfig, DEFAULT_BACKUP_RELAYS, DEFAULT_PRIMARY_RELAYS,
};
pub use error::Error;
pub use events::{quote_tag, select_latest, NostrTag, RelayMessage};

/// Re-exported so callers can name keys without depending on `nostr-sdk`.
pub use nostr_sdk::prelude::{Keys, PublicKey};
