use std::env;
use std::time::Duration;

use nostr_sdk::prelude::*;

use crate::Error;

pub const DEFAULT_PRIMARY_RELAYS: &[&str] = &["wss://relay.damus.io", "wss://nos.lol"];
pub const DEFAULT_BACKUP_RELAYS: &[&str] = &["wss://multiplexer.huszonegy.world"];

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 2;
const DEFAULT_PUBLISH_TIMEOUT_SECS: u64 = 6;
const DEFAULT_SETTLE_DELAY_SECS: u64 = 5;
const DEFAULT_FETCH_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub primary_relays: Vec<String>,
    pub backup_relays: Vec<String>,
    /// How long a query waits for relays to return stored events.
    pub fetch_timeout: Duration,
    /// Upper bound on sending an event and collecting OK messages.
    pub publish_timeout: Duration,
    /// Pause after sending before connections are torn down.
    pub settle_delay: Duration,
    pub fetch_limit: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            primary_relays: to_owned(DEFAULT_PRIMARY_RELAYS),
            backup_relays: to_owned(DEFAULT_BACKUP_RELAYS),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            publish_timeout: Duration::from_secs(DEFAULT_PUBLISH_TIMEOUT_SECS),
            settle_delay: Duration::from_secs(DEFAULT_SETTLE_DELAY_SECS),
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

impl RelayConfig {
    /// Defaults, with `NOSTR_RELAYS` / `NOSTR_BACKUP_RELAYS` (comma or
    /// whitespace separated) replacing the primary / backup sets.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = env::var("NOSTR_RELAYS") {
            let relays = parse_relays(&value);
            if !relays.is_empty() {
                config.primary_relays = relays;
            }
        }

        if let Ok(value) = env::var("NOSTR_BACKUP_RELAYS") {
            config.backup_relays = parse_relays(&value);
        }

        config
    }

    /// Primary then backup relays, without duplicates.
    pub fn relays(&self) -> Vec<String> {
        let mut all: Vec<String> = Vec::new();
        for relay in self.primary_relays.iter().chain(&self.backup_relays) {
            if !all.contains(relay) {
                all.push(relay.clone());
            }
        }
        all
    }

    /// Relay advertised in quote tags.
    pub fn relay_hint(&self) -> &str {
        self.primary_relays
            .first()
            .or_else(|| self.backup_relays.first())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Parse a secret key given as hex or bech32 `nsec`.
pub fn parse_keys(secret: &str) -> Result<Keys, Error> {
    Ok(Keys::parse(secret.trim())?)
}

pub fn parse_relays(value: &str) -> Vec<String> {
    value
        .split(',')
        .flat_map(|chunk| chunk.split_whitespace())
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn to_owned(relays: &[&str]) -> Vec<String> {
    relays.iter().map(|r| r.to_string()).collect()
}
