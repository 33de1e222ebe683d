//! One pass of the status bot.

use flat_store::{ServiceStatus, StatusRecord, StatusStore};
use nostr_relay::{quote_tag, PublishResult, RelayClient, RelayMessage};
use tracing::{error, info};

use crate::compose::{build_prompt, compose_content, PLACEHOLDER_NOTE};
use crate::config::BotConfig;
use crate::error::BotError;
use crate::probe::ApiProbe;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub previous_status: Option<ServiceStatus>,
    pub status: ServiceStatus,
    pub commentary_used: bool,
    pub quoted_event_id: Option<String>,
    pub content: String,
    pub published: PublishResult,
}

impl RunReport {
    pub fn status_changed(&self) -> bool {
        self.previous_status
            .is_some_and(|previous| previous != self.status)
    }
}

/// Fetch the last note, probe the API, publish a status note quoting the
/// last note, and record the result.
pub struct StatusBot<R, P> {
    config: BotConfig,
    relay: R,
    probe: P,
    store: StatusStore,
}

impl<R: RelayClient, P: ApiProbe> StatusBot<R, P> {
    pub fn new(config: BotConfig, relay: R, probe: P) -> Self {
        let store = StatusStore::new(config.status_file.clone());
        Self {
            config,
            relay,
            probe,
            store,
        }
    }

    /// Run the whole workflow once.
    ///
    /// Relay and API failures degrade the run (no quote, `down` status).
    /// A failed publish aborts it and leaves the status file untouched.
    pub async fn run(&self) -> Result<RunReport, BotError> {
        let previous_status = self.store.load().map(|record| record.last_status);

        let latest = self.fetch_latest().await;

        let note_content = latest
            .as_ref()
            .map(|message| message.content.as_str())
            .unwrap_or(PLACEHOLDER_NOTE);
        let outcome = self.probe.probe(&build_prompt(note_content)).await;
        info!(status = %outcome.status, "Routstr current status");
        if let Some(previous) = previous_status.filter(|p| *p != outcome.status) {
            info!(from = %previous, to = %outcome.status, "Routstr status changed");
        }

        let content = compose_content(
            outcome.commentary.as_deref(),
            outcome.status,
            &self.config.api_url,
            latest.as_ref(),
        );

        let tags = latest
            .iter()
            .map(|message| quote_tag(message, self.config.relay.relay_hint()))
            .collect();

        let Some(published) = self.relay.publish(content.clone(), tags).await else {
            error!("Failed to publish Nostr event");
            return Err(BotError::PublishFailed);
        };
        info!(event_id = %published.event_id, "Published new status event");

        self.store
            .save(&StatusRecord::new(outcome.status, &published.event_id))?;

        Ok(RunReport {
            previous_status,
            status: outcome.status,
            commentary_used: outcome.commentary.is_some(),
            quoted_event_id: latest.map(|message| message.id),
            content,
            published,
        })
    }

    async fn fetch_latest(&self) -> Option<RelayMessage> {
        let latest = self.relay.fetch_latest(&self.config.public_key()).await;
        match &latest {
            Some(message) => info!(
                event_id = %message.id,
                created_at = message.created_at,
                "Found previous note"
            ),
            None => info!("No previous note found"),
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;
    use async_trait::async_trait;
    use nostr_relay::{Keys, NostrTag, PublicKey};
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct FakeRelay {
        latest: Option<RelayMessage>,
        accept: bool,
        fetched_for: Mutex<Vec<PublicKey>>,
        published: Mutex<Vec<(String, Vec<NostrTag>)>>,
    }

    impl FakeRelay {
        fn accepting(latest: Option<RelayMessage>) -> Self {
            Self {
                latest,
                accept: true,
                ..Default::default()
            }
        }

        fn rejecting(latest: Option<RelayMessage>) -> Self {
            Self {
                latest,
                accept: false,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl RelayClient for FakeRelay {
        async fn fetch_latest(&self, author: &PublicKey) -> Option<RelayMessage> {
            self.fetched_for.lock().unwrap().push(*author);
            self.latest.clone()
        }

        async fn publish(&self, content: String, tags: Vec<NostrTag>) -> Option<PublishResult> {
            self.published.lock().unwrap().push((content, tags));
            self.accept.then(|| PublishResult {
                event_id: "e".repeat(64),
                success: 2,
                failed: 1,
            })
        }
    }

    struct FakeProbe {
        outcome: ProbeOutcome,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeProbe {
        fn new(outcome: ProbeOutcome) -> Self {
            Self {
                outcome,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ApiProbe for FakeProbe {
        async fn probe(&self, prompt: &str) -> ProbeOutcome {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.outcome.clone()
        }
    }

    fn config(dir: &Path) -> BotConfig {
        let mut config = BotConfig::new(Keys::generate());
        config.api_url = "https://api.routstr.com".to_string();
        config.status_file = dir.join("routstr_status.json");
        config
    }

    fn previous_note(author: &str) -> RelayMessage {
        RelayMessage {
            id: "1a".repeat(32),
            author: author.to_string(),
            created_at: 1_700_000_000,
            kind: 1,
            content: "Routstr keeps routing".to_string(),
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn test_run_without_previous_note() {
        let dir = tempdir().unwrap();
        let config = config(dir.path());
        let author = config.public_key();
        let bot = StatusBot::new(
            config,
            FakeRelay::accepting(None),
            FakeProbe::new(ProbeOutcome::up(Some("Bitcoin fixes this.".to_string()))),
        );

        let report = bot.run().await.unwrap();
        assert_eq!(report.status, ServiceStatus::Up);
        assert!(report.commentary_used);
        assert!(report.quoted_event_id.is_none());
        assert!(report.previous_status.is_none());

        assert_eq!(*bot.relay.fetched_for.lock().unwrap(), vec![author]);
        let prompts = bot.probe.prompts.lock().unwrap();
        assert!(prompts[0].contains("'Error fetching event'"));

        let published = bot.relay.published.lock().unwrap();
        let (content, tags) = &published[0];
        assert!(tags.is_empty());
        assert!(content.starts_with("Bitcoin fixes this.\n\n✅ Routstr is routing!"));
        assert!(!content.contains("nostr:"));

        let record = bot.store.load().unwrap();
        assert_eq!(record, StatusRecord::new(ServiceStatus::Up, "e".repeat(64)));
    }

    #[tokio::test]
    async fn test_run_quotes_previous_note() {
        let dir = tempdir().unwrap();
        let config = config(dir.path());
        let author = config.public_key().to_hex();
        let note = previous_note(&author);
        let bot = StatusBot::new(
            config,
            FakeRelay::accepting(Some(note.clone())),
            FakeProbe::new(ProbeOutcome::up(None)),
        );

        let report = bot.run().await.unwrap();
        assert_eq!(report.quoted_event_id.as_deref(), Some(note.id.as_str()));
        assert!(!report.commentary_used);

        let prompts = bot.probe.prompts.lock().unwrap();
        assert!(prompts[0].contains("'Routstr keeps routing'"));

        let published = bot.relay.published.lock().unwrap();
        let (content, tags) = &published[0];
        assert_eq!(
            tags[0].to_vec(),
            vec![
                "q".to_string(),
                note.id.clone(),
                "wss://relay.damus.io".to_string(),
                author
            ]
        );
        assert!(content.starts_with("✅ Routstr is routing!"));
        assert!(content.ends_with(&note.nostr_uri().unwrap()));
    }

    #[tokio::test]
    async fn test_down_probe_recorded() {
        let dir = tempdir().unwrap();
        let config = config(dir.path());
        let store = StatusStore::new(config.status_file.clone());
        store
            .save(&StatusRecord::new(ServiceStatus::Up, "old"))
            .unwrap();

        let bot = StatusBot::new(
            config,
            FakeRelay::accepting(Some(previous_note("cd"))),
            FakeProbe::new(crate::probe::interpret_response(500, "Internal Server Error")),
        );

        let report = bot.run().await.unwrap();
        assert_eq!(report.status, ServiceStatus::Down);
        assert_eq!(report.previous_status, Some(ServiceStatus::Up));
        assert!(report.status_changed());
        assert!(report.content.starts_with("🔴 Routstr is NOT routing!"));

        let record = store.load().unwrap();
        assert_eq!(record.last_status, ServiceStatus::Down);
        assert_eq!(record.last_event_id.as_deref(), Some(report.published.event_id.as_str()));
    }

    #[tokio::test]
    async fn test_failed_publish_leaves_status_untouched() {
        let dir = tempdir().unwrap();
        let config = config(dir.path());
        let status_file = config.status_file.clone();
        let before = StatusRecord {
            last_status: ServiceStatus::Down,
            last_event_id: Some("previous-event".to_string()),
        };
        StatusStore::new(&status_file).save(&before).unwrap();
        let raw_before = std::fs::read_to_string(&status_file).unwrap();

        let bot = StatusBot::new(
            config,
            FakeRelay::rejecting(None),
            FakeProbe::new(ProbeOutcome::up(None)),
        );

        let err = bot.run().await.unwrap_err();
        assert!(matches!(err, BotError::PublishFailed));
        assert_eq!(bot.relay.published.lock().unwrap().len(), 1);
        assert_eq!(std::fs::read_to_string(&status_file).unwrap(), raw_before);
    }

    #[tokio::test]
    async fn test_failed_publish_without_status_file_creates_nothing() {
        let dir = tempdir().unwrap();
        let config = config(dir.path());
        let status_file = config.status_file.clone();

        let bot = StatusBot::new(
            config,
            FakeRelay::rejecting(None),
            FakeProbe::new(ProbeOutcome::down()),
        );

        assert!(bot.run().await.is_err());
        assert!(!status_file.exists());
    }
}
