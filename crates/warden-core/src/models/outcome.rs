//! Actor-visible outcomes. The presentation layer maps these to localized
//! chat messages; the pipeline never renders text itself.

/// Result of a submit flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dispatch succeeded; the actor is told the report was sent even if the
    /// subsequent persist failed (logged server-side only).
    Sent,
    /// The actor already has an open report against this target.
    DuplicateBySelf,
    /// Another actor already has an open report against this target.
    DuplicateByOther,
    /// The duplicate lookup failed; surfaced as a generic failure rather
    /// than silently proceeding.
    InternalError,
    /// The notification channel rejected the report or was unreachable.
    WebhookError,
}

/// Result of a cancel flow (author or staff).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    /// No open report within the freshness window.
    NotFound,
    /// The cancellation could not be delivered to the channel.
    WebhookError,
    /// The channel accepted the cancellation but the local record could not
    /// be updated (already cancelled by a concurrent flow, or a store
    /// failure).
    CancelledButNotRecorded,
    /// Missing staff permission.
    Unauthorized,
    /// Command cooldown has not elapsed.
    RateLimited { cooldown_secs: i64 },
}

/// Result of a staff mark-handled flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandledOutcome {
    Handled,
    NotFound,
    WebhookError,
    Unauthorized,
    RateLimited { cooldown_secs: i64 },
}
