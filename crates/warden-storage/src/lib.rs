//! # warden-storage
//!
//! SQLite persistence for reports. A single write connection behind a mutex,
//! versioned migrations, and the window queries the pipeline needs.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use chrono::{DateTime, SecondsFormat, Utc};

use warden_core::errors::{StorageError, WardenError};

/// Wrap an underlying SQLite failure into the storage error domain.
pub(crate) fn to_storage_err(message: String) -> WardenError {
    StorageError::SqliteError { message }.into()
}

/// Timestamps are stored as RFC 3339 with a `Z` suffix so that string
/// comparison in SQL matches chronological order.
pub(crate) fn fmt_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_ts(raw: &str) -> Result<DateTime<Utc>, WardenError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {raw:?}: {e}")))
}
