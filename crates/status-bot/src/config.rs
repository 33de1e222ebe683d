//! Configuration for the status bot.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use flat_store::DEFAULT_STATUS_FILE;
use nostr_relay::{parse_keys, Keys, PublicKey, RelayConfig};

use crate::error::BotError;

/// Default Routstr API base URL.
pub const DEFAULT_API_URL: &str = "https://api.example.com";

/// Default model used for the probe request.
pub const DEFAULT_MODEL: &str = "nousresearch/hermes-2-pro-llama-3-8b";

/// Default probe timeout in seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`StatusBot`](crate::StatusBot).
#[derive(Clone)]
pub struct BotConfig {
    /// Routstr API base URL; the probe posts to `{api_url}/v1/chat/completions`.
    pub api_url: String,

    /// Bearer token for the API. No `Authorization` header when unset.
    pub api_key: Option<String>,

    /// Model requested by the probe.
    pub model: String,

    /// Upper bound on the probe request.
    pub probe_timeout: Duration,

    /// Where the last status and event id are kept.
    pub status_file: PathBuf,

    /// Relays to read from and publish to.
    pub relay: RelayConfig,

    /// Bot signing keys.
    pub keys: Keys,
}

impl BotConfig {
    /// Configuration with defaults for everything but the keys.
    pub fn new(keys: Keys) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            status_file: PathBuf::from(DEFAULT_STATUS_FILE),
            relay: RelayConfig::default(),
            keys,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `NOSTR_BOT_NSEC` - bot secret key, hex or bech32 `nsec`
    ///
    /// Optional environment variables:
    /// - `ROUTSTR_API_URL` - API base URL (default: https://api.example.com)
    /// - `ROUTSTR_API_KEY` - bearer token (default: none)
    /// - `ROUTSTR_MODEL` - probe model (default: nousresearch/hermes-2-pro-llama-3-8b)
    /// - `ROUTSTR_PROBE_TIMEOUT_SECS` - probe timeout (default: 10)
    /// - `ROUTSTR_STATUS_FILE` - status file path (default: routstr_status.json)
    /// - `NOSTR_RELAYS` / `NOSTR_BACKUP_RELAYS` - relay overrides
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| env::var(name).ok(), RelayConfig::from_env())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F, relay: RelayConfig) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let secret = var("NOSTR_BOT_NSEC").ok_or(BotError::MissingEnv("NOSTR_BOT_NSEC"))?;
        let keys = parse_keys(&secret).map_err(BotError::InvalidKey)?;

        let api_url = var("ROUTSTR_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let model = var("ROUTSTR_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let probe_timeout = var("ROUTSTR_PROBE_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS));

        let status_file = var("ROUTSTR_STATUS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATUS_FILE));

        Ok(Self {
            api_url,
            api_key: var("ROUTSTR_API_KEY"),
            model,
            probe_timeout,
            status_file,
            relay,
            keys,
        })
    }

    /// The bot's own public key, used to find its previous note.
    pub fn public_key(&self) -> PublicKey {
        self.keys.public_key()
    }

    /// Chat completion endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url)
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("probe_timeout", &self.probe_timeout)
            .field("status_file", &self.status_file)
            .field("relay", &self.relay)
            .field("public_key", &self.public_key().to_hex())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn secret_hex() -> (Keys, String) {
        let keys = Keys::generate();
        let hex = keys.secret_key().to_secret_hex();
        (keys, hex)
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = BotConfig::from_lookup(lookup(&[]), RelayConfig::default()).unwrap_err();
        assert!(matches!(err, BotError::MissingEnv("NOSTR_BOT_NSEC")));

        let err = BotConfig::from_lookup(lookup(&[("NOSTR_BOT_NSEC", " ")]), RelayConfig::default())
            .unwrap_err();
        assert!(matches!(err, BotError::MissingEnv(_)));
    }

    #[test]
    fn test_invalid_key_is_fatal() {
        let err = BotConfig::from_lookup(
            lookup(&[("NOSTR_BOT_NSEC", "nsec1garbage")]),
            RelayConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BotError::InvalidKey(_)));
    }

    #[test]
    fn test_defaults() {
        let (keys, hex) = secret_hex();
        let config =
            BotConfig::from_lookup(lookup(&[("NOSTR_BOT_NSEC", hex.as_str())]), RelayConfig::default())
                .unwrap();

        assert_eq!(config.public_key(), keys.public_key());
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.chat_url(), "https://api.example.com/v1/chat/completions");
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.probe_timeout, Duration::from_secs(10));
        assert_eq!(config.status_file, PathBuf::from("routstr_status.json"));
    }

    #[test]
    fn test_overrides() {
        let (_, hex) = secret_hex();
        let config = BotConfig::from_lookup(
            lookup(&[
                ("NOSTR_BOT_NSEC", hex.as_str()),
                ("ROUTSTR_API_URL", "https://routstr.example.org/"),
                ("ROUTSTR_API_KEY", "sk-test"),
                ("ROUTSTR_MODEL", "x-ai/grok-3-mini-beta"),
                ("ROUTSTR_PROBE_TIMEOUT_SECS", "3"),
                ("ROUTSTR_STATUS_FILE", "/tmp/status.json"),
            ]),
            RelayConfig::default(),
        )
        .unwrap();

        assert_eq!(config.chat_url(), "https://routstr.example.org/v1/chat/completions");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "x-ai/grok-3-mini-beta");
        assert_eq!(config.probe_timeout, Duration::from_secs(3));
        assert_eq!(config.status_file, PathBuf::from("/tmp/status.json"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = BotConfig::new(Keys::generate());
        config.api_key = Some("sk-secret".to_string());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
