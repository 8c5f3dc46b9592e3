//! Duplicate detection — has this target already been reported within the
//! policy window, and by whom?

use warden_core::errors::WardenResult;
use warden_core::traits::IReportStore;

/// What the detector found. A store failure is the `Err` arm of the result;
/// the caller surfaces a generic failure and must not silently proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateOutcome {
    /// No open report against the target within the window.
    None,
    /// The querying author already has one.
    SameAuthor,
    /// Someone else already has one.
    DifferentAuthor,
}

/// Look for an open report against `target_id` created within
/// `within_minutes`. When `author_id` is supplied and matches an existing
/// report's author, that takes precedence over reports by others.
pub fn find_open_report(
    store: &dyn IReportStore,
    author_id: Option<&str>,
    target_id: &str,
    within_minutes: i64,
) -> WardenResult<DuplicateOutcome> {
    let open = store.find_open_against(target_id, within_minutes)?;
    if open.is_empty() {
        return Ok(DuplicateOutcome::None);
    }
    if let Some(author) = author_id {
        if open.iter().any(|r| r.author_steamid == author) {
            return Ok(DuplicateOutcome::SameAuthor);
        }
    }
    Ok(DuplicateOutcome::DifferentAuthor)
}
