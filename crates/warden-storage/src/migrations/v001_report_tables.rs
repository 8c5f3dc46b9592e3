//! v001: reports.

use rusqlite::Connection;

use warden_core::errors::WardenResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> WardenResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reports (
            identifier          TEXT PRIMARY KEY,
            message_id          TEXT NOT NULL,
            victim_name         TEXT NOT NULL,
            victim_steamid      TEXT NOT NULL,
            suspect_name        TEXT NOT NULL,
            suspect_steamid     TEXT NOT NULL,
            reason              TEXT NOT NULL,
            host_name           TEXT NOT NULL,
            host_ip             TEXT NOT NULL,
            map_name            TEXT NOT NULL DEFAULT '',
            created_at          TEXT NOT NULL,
            deleted             INTEGER NOT NULL DEFAULT 0,
            deleted_by          TEXT,
            deleted_by_steamid  TEXT,
            deleted_by_staff    INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_reports_victim ON reports(victim_steamid, created_at);
        CREATE INDEX IF NOT EXISTS idx_reports_suspect ON reports(suspect_steamid, created_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
