//! Error types for the status bot.

use thiserror::Error;

/// Errors that stop a bot run.
///
/// Relay and API failures are not here: they degrade into "no previous note"
/// or a `down` status instead of aborting.
#[derive(Debug, Error)]
pub enum BotError {
    /// Required environment variable is not set.
    #[error("missing env var: {0}")]
    MissingEnv(&'static str),

    /// Signing key is neither valid hex nor a valid `nsec`.
    #[error("invalid signing key: {0}")]
    InvalidKey(#[source] nostr_relay::Error),

    /// Configuration error (e.g., HTTP client could not be built).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No relay accepted the status note.
    #[error("failed to publish status note")]
    PublishFailed,

    /// Status file could not be written.
    #[error("store error: {0}")]
    Store(#[from] flat_store::StoreError),
}
