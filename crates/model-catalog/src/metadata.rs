//! Run metadata side record.

use std::path::Path;

use chrono::NaiveDateTime;
use flat_store::{JsonDocument, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

/// `script_metadata.json`. Keys other than the timestamp are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    #[serde(default)]
    pub last_run_timestamp: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// ISO-8601 local timestamp with microseconds, e.g. `2025-04-11T09:30:00.123456`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Stamp the metadata file with `at`.
///
/// An absent or corrupt file is recreated with just the timestamp.
pub fn touch_run_metadata(path: &Path, at: NaiveDateTime) -> Result<RunMetadata, StoreError> {
    let doc = JsonDocument::new(path);

    let mut metadata = match doc.load::<RunMetadata>() {
        Ok(Some(existing)) => existing,
        Ok(None) => {
            info!(path = %path.display(), "Metadata file not found, creating it");
            RunMetadata::default()
        }
        Err(err) if err.is_corrupt() => {
            info!(path = %path.display(), error = %err, "Metadata file invalid, overwriting it");
            RunMetadata::default()
        }
        Err(err) => return Err(err),
    };

    metadata.last_run_timestamp = format_timestamp(at);
    doc.save(&metadata)?;
    info!(timestamp = %metadata.last_run_timestamp, "Updated script metadata");
    Ok(metadata)
}
