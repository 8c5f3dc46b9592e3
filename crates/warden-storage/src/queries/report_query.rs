//! Window queries: the lookups the cancellation and duplicate flows run.

use chrono::{Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use warden_core::errors::WardenResult;
use warden_core::models::Report;

use super::report_crud::{row_to_report, REPORT_COLUMNS};
use crate::{fmt_ts, to_storage_err};

/// Most recent open report authored by `author_steamid` within the last
/// `within_minutes`. A non-positive window disables the freshness filter.
pub fn find_open_by_author(
    conn: &Connection,
    author_steamid: &str,
    within_minutes: i64,
) -> WardenResult<Option<Report>> {
    let cutoff = window_cutoff(within_minutes);
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports
             WHERE victim_steamid = ?1 AND deleted = 0 AND created_at >= ?2
             ORDER BY created_at DESC
             LIMIT 1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![author_steamid, cutoff], |row| Ok(row_to_report(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match result {
        Some(report) => Ok(Some(report?)),
        None => Ok(None),
    }
}

/// All open reports against `target_steamid` within the last `within_minutes`.
pub fn find_open_against(
    conn: &Connection,
    target_steamid: &str,
    within_minutes: i64,
) -> WardenResult<Vec<Report>> {
    let cutoff = window_cutoff(within_minutes);
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports
             WHERE suspect_steamid = ?1 AND deleted = 0 AND created_at >= ?2
             ORDER BY created_at DESC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![target_steamid, cutoff], |row| Ok(row_to_report(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut reports = Vec::new();
    for row in rows {
        reports.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(reports)
}

/// RFC 3339 cutoff for a window. Timestamps share one format, so string
/// comparison in SQL matches chronological order.
fn window_cutoff(within_minutes: i64) -> String {
    if within_minutes <= 0 {
        // Earlier than any stored timestamp: no freshness filter.
        return String::new();
    }
    fmt_ts(Utc::now() - Duration::minutes(within_minutes))
}
