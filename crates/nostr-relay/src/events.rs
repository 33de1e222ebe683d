use nostr_sdk::prelude::*;

use crate::Error;

/// Plain data mirror of a Nostr tag: `[name, values...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NostrTag {
    pub name: String,
    pub values: Vec<String>,
}

impl NostrTag {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn to_sdk_tag(&self) -> Result<Tag, Error> {
        let mut parts = Vec::with_capacity(1 + self.values.len());
        parts.push(self.name.clone());
        parts.extend(self.values.clone());
        Ok(Tag::parse(parts)?)
    }

    pub fn from_sdk_tag(tag: &Tag) -> Self {
        let parts = tag.clone().to_vec();
        let name = parts.first().cloned().unwrap_or_default();
        let values = parts.into_iter().skip(1).collect();
        Self { name, values }
    }

    pub fn to_vec(&self) -> Vec<String> {
        std::iter::once(self.name.clone())
            .chain(self.values.iter().cloned())
            .collect()
    }
}

/// An event fetched from a relay. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayMessage {
    /// Hex event id.
    pub id: String,
    /// Hex public key of the author.
    pub author: String,
    pub created_at: u64,
    pub kind: u16,
    pub content: String,
    pub tags: Vec<NostrTag>,
}

impl RelayMessage {
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id.to_hex(),
            author: event.pubkey.to_hex(),
            created_at: event.created_at.as_secs(),
            kind: event.kind.as_u16(),
            content: event.content.clone(),
            tags: event.tags.iter().map(NostrTag::from_sdk_tag).collect(),
        }
    }

    /// `note1...` form of the id, if the id is well formed.
    pub fn bech32_id(&self) -> Option<String> {
        EventId::from_hex(&self.id).ok()?.to_bech32().ok()
    }

    /// NIP-21 URI (`nostr:note1...`) for embedding in note content.
    pub fn nostr_uri(&self) -> Option<String> {
        self.bech32_id().map(|note| format!("nostr:{note}"))
    }
}

/// NIP-18 quote tag: `["q", event_id, relay_hint, author_pubkey]`.
pub fn quote_tag(message: &RelayMessage, relay_hint: &str) -> NostrTag {
    NostrTag::new(
        "q",
        vec![
            message.id.clone(),
            relay_hint.to_string(),
            message.author.clone(),
        ],
    )
}

/// Newest candidate by `created_at`; equal timestamps resolve to the
/// lexicographically smallest id so repeated runs agree.
pub fn select_latest<I>(candidates: I) -> Option<RelayMessage>
where
    I: IntoIterator<Item = RelayMessage>,
{
    candidates.into_iter().max_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| b.id.cmp(&a.id))
    })
}
