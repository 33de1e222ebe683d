use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("nostr client error: {0}")]
    NostrClient(#[from] nostr_sdk::client::Error),
    #[error("nostr key error: {0}")]
    NostrKey(#[from] nostr_sdk::nostr::key::Error),
    #[error("nostr tag error: {0}")]
    NostrTag(#[from] nostr_sdk::nostr::event::tag::Error),
    #[error("relay task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("no signing key configured")]
    MissingSigningKey,
    #[error("no relays reachable")]
    NoRelays,
    #[error("operation timed out")]
    Timeout,
}
