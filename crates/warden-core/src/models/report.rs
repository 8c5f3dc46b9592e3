use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted player report.
///
/// `identifier` is generated at submission and doubles as the external
/// correlation key. `message_id` is assigned exactly once, on successful
/// dispatch, before the record is persisted. `cancelled` is monotonic: once
/// true it never reverts, and the cancellation fields are only ever written
/// together with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Opaque 15-char uppercase-alphanumeric primary key.
    pub identifier: String,
    /// Correlation id addressing the record in the external channel.
    pub message_id: String,
    /// Reporting player at submission time.
    pub author_name: String,
    pub author_steamid: String,
    /// Reported player at submission time.
    pub target_name: String,
    pub target_steamid: String,
    /// Free text, passed through unmodified.
    pub reason: String,
    /// Submission context, immutable after insert.
    pub server_name: String,
    pub server_ip: String,
    pub map_name: String,
    /// When the report was submitted (UTC).
    pub created_at: DateTime<Utc>,
    /// Cancellation state. False → true only.
    pub cancelled: bool,
    /// Who cancelled, set only on cancellation.
    pub cancelled_by: Option<String>,
    pub cancelled_by_steamid: Option<String>,
    /// True when staff cancelled, false when the author self-cancelled.
    pub cancelled_by_staff: bool,
}

impl Report {
    /// Whether the report is still open (visible to cancellation lookups).
    pub fn is_open(&self) -> bool {
        !self.cancelled
    }

    /// Whether the report was created within the last `minutes` as of `now`.
    /// A non-positive window means no freshness constraint.
    pub fn is_within_window(&self, minutes: i64, now: DateTime<Utc>) -> bool {
        minutes <= 0 || self.created_at >= now - chrono::Duration::minutes(minutes)
    }
}
