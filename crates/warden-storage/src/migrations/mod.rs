//! Versioned schema migrations, tracked through `PRAGMA user_version`.

pub mod v001_report_tables;

use rusqlite::Connection;

use warden_core::errors::{StorageError, WardenResult};

use crate::to_storage_err;

/// Schema version the code expects.
const CURRENT_VERSION: u32 = 1;

/// Bring the database up to the current schema version.
pub fn run_migrations(conn: &Connection) -> WardenResult<()> {
    let version: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    if version < 1 {
        v001_report_tables::migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: 1,
            reason: e.to_string(),
        })?;
    }

    if version < CURRENT_VERSION {
        conn.pragma_update(None, "user_version", CURRENT_VERSION)
            .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::info!(from = version, to = CURRENT_VERSION, "storage: migrated");
    }
    Ok(())
}
