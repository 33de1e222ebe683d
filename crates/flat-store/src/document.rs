//! A single JSON document on disk.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, StoreError};

/// A JSON document stored at a fixed path.
///
/// Reads distinguish "not there yet" from "there but unreadable" so callers
/// can decide whether a corrupt file is fatal. Writes replace the whole file:
/// the new contents go to a temp file in the same directory which is then
/// renamed over the target, so a crash never leaves a half-written document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDocument {
    path: PathBuf,
}

impl JsonDocument {
    /// Create a handle for the document at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and decode the document.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let value = serde_json::from_slice(&bytes).map_err(|e| StoreError::json(&self.path, e))?;
        Ok(Some(value))
    }

    /// Encode `value` and atomically replace the document with it.
    pub fn save<T: Serialize>(&self, value: &T) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut ser)
            .map_err(|e| StoreError::json(&self.path, e))?;
        buf.push(b'\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(&buf)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), bytes = buf.len(), "Wrote json document");
        Ok(())
    }
}
