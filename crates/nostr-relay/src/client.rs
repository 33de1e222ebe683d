use std::future::Future;

use async_trait::async_trait;
use nostr_sdk::prelude::*;
use tracing::{debug, error, info, warn};

use crate::config::RelayConfig;
use crate::events::{select_latest, NostrTag, RelayMessage};
use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    pub event_id: String,
    pub success: usize,
    pub failed: usize,
}

/// Read and write access to the relay set.
///
/// Both operations swallow failures: a fetch that fails looks the same as a
/// fetch that found nothing, and a publish that fails returns `None`.
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Newest short text note by `author`, if any relay has one.
    async fn fetch_latest(&self, author: &PublicKey) -> Option<RelayMessage>;

    /// Sign and broadcast a short text note with `tags`.
    async fn publish(&self, content: String, tags: Vec<NostrTag>) -> Option<PublishResult>;
}

/// [`RelayClient`] backed by `nostr-sdk`.
///
/// Every call opens its own connections and closes them before returning;
/// nothing is pooled between calls. The relay work runs on a spawned task so
/// a slow relay never stalls the caller's task.
#[derive(Clone)]
pub struct NostrRelayClient {
    config: RelayConfig,
    keys: Option<Keys>,
}

impl NostrRelayClient {
    pub fn new(config: RelayConfig, keys: Keys) -> Self {
        Self {
            config,
            keys: Some(keys),
        }
    }

    /// Client that can query but refuses to publish.
    pub fn read_only(config: RelayConfig) -> Self {
        Self { config, keys: None }
    }

    pub fn can_publish(&self) -> bool {
        self.keys.is_some()
    }
}

#[async_trait]
impl RelayClient for NostrRelayClient {
    async fn fetch_latest(&self, author: &PublicKey) -> Option<RelayMessage> {
        match run_isolated(fetch_latest_task(self.config.clone(), *author)).await {
            Ok(latest) => latest,
            Err(err) => {
                warn!(error = %err, "Error querying latest Nostr event");
                None
            }
        }
    }

    async fn publish(&self, content: String, tags: Vec<NostrTag>) -> Option<PublishResult> {
        let Some(keys) = self.keys.clone() else {
            error!("{}", Error::MissingSigningKey);
            return None;
        };

        match run_isolated(publish_task(self.config.clone(), keys, content, tags)).await {
            Ok(result) => Some(result),
            Err(err) => {
                error!(error = %err, "Error publishing event");
                None
            }
        }
    }
}

async fn run_isolated<T, F>(task: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(task).await?
}

async fn connect(relays: &[String], keys: Option<Keys>) -> Result<Client, Error> {
    let client = match keys {
        Some(keys) => Client::builder().signer(keys).build(),
        None => Client::default(),
    };

    let mut added = 0usize;
    for relay in relays {
        match client.add_relay(relay).await {
            Ok(_) => added += 1,
            Err(err) => warn!(relay = %relay, error = %err, "Skipping relay"),
        }
    }
    if added == 0 {
        return Err(Error::NoRelays);
    }

    client.connect().await;
    Ok(client)
}

async fn fetch_latest_task(
    config: RelayConfig,
    author: PublicKey,
) -> Result<Option<RelayMessage>, Error> {
    let client = connect(&config.relays(), None).await?;

    let filter = Filter::new()
        .author(author)
        .kind(Kind::TextNote)
        .limit(config.fetch_limit);
    let fetched = client.fetch_events(filter, config.fetch_timeout).await;
    client.disconnect().await;

    let events = fetched?;
    debug!(candidates = events.len(), "Fetched candidate notes");
    Ok(select_latest(events.iter().map(RelayMessage::from_event)))
}

async fn publish_task(
    config: RelayConfig,
    keys: Keys,
    content: String,
    tags: Vec<NostrTag>,
) -> Result<PublishResult, Error> {
    let sdk_tags = tags
        .iter()
        .map(NostrTag::to_sdk_tag)
        .collect::<Result<Vec<_>, _>>()?;
    let builder = EventBuilder::text_note(content).tags(sdk_tags);

    let client = connect(&config.relays(), Some(keys)).await?;
    let sent = tokio::time::timeout(config.publish_timeout, client.send_event_builder(builder)).await;
    if matches!(sent, Ok(Ok(_))) {
        tokio::time::sleep(config.settle_delay).await;
    }
    client.disconnect().await;

    let output = sent.map_err(|_| Error::Timeout)??;
    for (relay, reason) in output.failed.iter() {
        warn!(relay = %relay, reason = %reason, "Relay not OK");
    }

    let result = PublishResult {
        event_id: output.id().to_hex(),
        success: output.success.len(),
        failed: output.failed.len(),
    };
    info!(
        event_id = %result.event_id,
        success = result.success,
        failed = result.failed,
        "Published nostr event"
    );
    Ok(result)
}
