use crate::errors::WardenResult;
use crate::models::Report;

/// Durable record of reports, keyed by identifier.
pub trait IReportStore: Send + Sync {
    /// Insert a new report. Constraint violation or connectivity loss is an
    /// `Err`; the submit flow logs it without changing the actor-visible
    /// outcome.
    fn insert(&self, report: &Report) -> WardenResult<()>;

    /// Fetch a report by identifier, cancelled or not.
    fn get(&self, identifier: &str) -> WardenResult<Option<Report>>;

    /// Most recent open report authored by `author_steamid` within the last
    /// `within_minutes`. Older reports are invisible, not an error.
    fn find_open_by_author(
        &self,
        author_steamid: &str,
        within_minutes: i64,
    ) -> WardenResult<Option<Report>>;

    /// All open reports against `target_steamid` within the last
    /// `within_minutes` (duplicate-detection query).
    fn find_open_against(
        &self,
        target_steamid: &str,
        within_minutes: i64,
    ) -> WardenResult<Vec<Report>>;

    /// Mark a report cancelled. Returns true exactly once per identifier;
    /// false when the identifier is unknown or already cancelled. This is
    /// the final guard of the cancellation invariant.
    fn mark_cancelled(
        &self,
        identifier: &str,
        by_name: &str,
        by_steamid: &str,
        by_staff: bool,
    ) -> WardenResult<bool>;
}
