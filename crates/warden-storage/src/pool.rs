//! The single write connection. Reports are low-volume, so one connection
//! behind a mutex serves both reads and writes; WAL keeps the file readable
//! by external tooling while a flow holds the lock.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use warden_core::errors::WardenResult;

use crate::to_storage_err;

/// Owns the SQLite connection and serializes access to it.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a connection to the given database file.
    pub fn open(path: &Path) -> WardenResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory connection (for testing).
    pub fn open_in_memory() -> WardenResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure while holding the connection.
    pub fn with_conn<F, T>(&self, f: F) -> WardenResult<T>
    where
        F: FnOnce(&Connection) -> WardenResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}

fn apply_pragmas(conn: &Connection) -> WardenResult<()> {
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| to_storage_err(e.to_string()))?;
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| to_storage_err(e.to_string()))?;
    conn.pragma_update(None, "busy_timeout", 5000)
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
