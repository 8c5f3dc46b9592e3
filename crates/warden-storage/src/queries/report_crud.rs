//! Insert, get, mark-cancelled for reports.

use rusqlite::{params, Connection, OptionalExtension, Row};

use warden_core::errors::WardenResult;
use warden_core::models::Report;

use crate::{fmt_ts, parse_ts, to_storage_err};

pub(crate) const REPORT_COLUMNS: &str = "identifier, message_id, victim_name, victim_steamid, \
     suspect_name, suspect_steamid, reason, host_name, host_ip, map_name, created_at, \
     deleted, deleted_by, deleted_by_steamid, deleted_by_staff";

/// Insert a single report. The identifier is the primary key, so a duplicate
/// insert surfaces as a constraint violation.
pub fn insert_report(conn: &Connection, report: &Report) -> WardenResult<()> {
    conn.execute(
        "INSERT INTO reports (
            identifier, message_id, victim_name, victim_steamid,
            suspect_name, suspect_steamid, reason, host_name, host_ip,
            map_name, created_at, deleted, deleted_by, deleted_by_steamid,
            deleted_by_staff
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            report.identifier,
            report.message_id,
            report.author_name,
            report.author_steamid,
            report.target_name,
            report.target_steamid,
            report.reason,
            report.server_name,
            report.server_ip,
            report.map_name,
            fmt_ts(report.created_at),
            report.cancelled as i32,
            report.cancelled_by,
            report.cancelled_by_steamid,
            report.cancelled_by_staff as i32,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get a single report by identifier.
pub fn get_report(conn: &Connection, identifier: &str) -> WardenResult<Option<Report>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE identifier = ?1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![identifier], |row| Ok(row_to_report(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match result {
        Some(report) => Ok(Some(report?)),
        None => Ok(None),
    }
}

/// Mark a report cancelled. The `deleted = 0` guard makes this succeed at
/// most once per identifier regardless of concurrent callers.
pub fn mark_cancelled(
    conn: &Connection,
    identifier: &str,
    by_name: &str,
    by_steamid: &str,
    by_staff: bool,
) -> WardenResult<bool> {
    let changed = conn
        .execute(
            "UPDATE reports
             SET deleted = 1, deleted_by = ?2, deleted_by_steamid = ?3, deleted_by_staff = ?4
             WHERE identifier = ?1 AND deleted = 0",
            params![identifier, by_name, by_steamid, by_staff as i32],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed == 1)
}

/// Map a row in `REPORT_COLUMNS` order back to the model.
pub(crate) fn row_to_report(row: &Row<'_>) -> WardenResult<Report> {
    let get_text = |idx: usize| -> WardenResult<String> {
        row.get(idx).map_err(|e| to_storage_err(e.to_string()))
    };
    let created_at_raw: String = get_text(10)?;
    let deleted: i64 = row.get(11).map_err(|e| to_storage_err(e.to_string()))?;
    let by_staff: i64 = row.get(14).map_err(|e| to_storage_err(e.to_string()))?;
    Ok(Report {
        identifier: get_text(0)?,
        message_id: get_text(1)?,
        author_name: get_text(2)?,
        author_steamid: get_text(3)?,
        target_name: get_text(4)?,
        target_steamid: get_text(5)?,
        reason: get_text(6)?,
        server_name: get_text(7)?,
        server_ip: get_text(8)?,
        map_name: get_text(9)?,
        created_at: parse_ts(&created_at_raw)?,
        cancelled: deleted != 0,
        cancelled_by: row.get(12).map_err(|e| to_storage_err(e.to_string()))?,
        cancelled_by_steamid: row.get(13).map_err(|e| to_storage_err(e.to_string()))?,
        cancelled_by_staff: by_staff != 0,
    })
}
