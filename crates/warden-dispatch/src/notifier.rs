//! The delivery seam. The pipeline talks to this trait; production uses
//! `WebhookClient`, tests substitute their own.

use async_trait::async_trait;

use warden_core::errors::WardenResult;
use warden_core::models::Actor;

use crate::protocol::ReportEvent;

/// At-least-once delivery sink for report events.
#[async_trait]
pub trait INotifier: Send + Sync {
    /// Deliver a submission or cancellation event. Returns the correlation
    /// id addressing the record in the channel; the caller stores it and
    /// must not persist or escalate on failure.
    async fn submit(&self, event: &ReportEvent) -> WardenResult<String>;

    /// Cancel an external record by correlation id. Failure means the
    /// caller must not mark the local record cancelled.
    async fn cancel(&self, message_id: &str) -> WardenResult<()>;

    /// Mark an external record handled by a staff member.
    async fn mark_handled(&self, message_id: &str, admin: &Actor) -> WardenResult<()>;
}
