//! Flat-file JSON persistence.
//!
//! The status tools keep all durable state in small JSON files next to the
//! process. This crate provides the one read/write path they share:
//!
//! - [`JsonDocument`] - load a typed document, or atomically replace it
//! - [`StatusStore`] / [`StatusRecord`] - the status bot's last-known state
//! - [`StoreError`] - error type for store operations
//!
//! # Example
//!
//! ```rust,no_run
//! use flat_store::{ServiceStatus, StatusRecord, StatusStore};
//!
//! let store = StatusStore::new("routstr_status.json");
//! if let Some(previous) = store.load() {
//!     println!("last status: {}", previous.last_status);
//! }
//! store.save(&StatusRecord::new(ServiceStatus::Up, "event-id"))?;
//! # Ok::<(), flat_store::StoreError>(())
//! ```

mod document;
mod error;
mod status;

pub use document::JsonDocument;
pub use error::{Result, StoreError};
pub use status::{ServiceStatus, StatusRecord, StatusStore, DEFAULT_STATUS_FILE};
