//! Last-known service status, persisted between bot runs.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::document::JsonDocument;
use crate::error::Result;

/// Default status file name.
pub const DEFAULT_STATUS_FILE: &str = "routstr_status.json";

/// Reachability of the monitored API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Up,
    Down,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only durable state the bot keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub last_status: ServiceStatus,
    pub last_event_id: Option<String>,
}

impl StatusRecord {
    pub fn new(status: ServiceStatus, event_id: impl Into<String>) -> Self {
        Self {
            last_status: status,
            last_event_id: Some(event_id.into()),
        }
    }
}

/// Typed access to the status file.
#[derive(Debug, Clone)]
pub struct StatusStore {
    doc: JsonDocument,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            doc: JsonDocument::new(path),
        }
    }

    /// Load the previous record.
    ///
    /// A corrupt file is reported and treated as absent.
    pub fn load(&self) -> Option<StatusRecord> {
        match self.doc.load() {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "Status file unreadable, starting fresh");
                None
            }
        }
    }

    /// Overwrite the status file with `record`.
    pub fn save(&self, record: &StatusRecord) -> Result<()> {
        self.doc.save(record)
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_FILE)
    }
}
