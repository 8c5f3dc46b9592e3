//! StorageEngine — owns the write connection, runs migrations on open,
//! implements IReportStore.

use std::path::Path;

use warden_core::errors::WardenResult;
use warden_core::models::Report;
use warden_core::traits::IReportStore;

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries;

/// The report store. One per database file.
pub struct StorageEngine {
    writer: WriteConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> WardenResult<Self> {
        let writer = WriteConnection::open(path)?;
        let engine = Self { writer };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> WardenResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        let engine = Self { writer };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> WardenResult<()> {
        self.writer.with_conn(migrations::run_migrations)
    }
}

impl IReportStore for StorageEngine {
    fn insert(&self, report: &Report) -> WardenResult<()> {
        self.writer
            .with_conn(|conn| queries::report_crud::insert_report(conn, report))
    }

    fn get(&self, identifier: &str) -> WardenResult<Option<Report>> {
        self.writer
            .with_conn(|conn| queries::report_crud::get_report(conn, identifier))
    }

    fn find_open_by_author(
        &self,
        author_steamid: &str,
        within_minutes: i64,
    ) -> WardenResult<Option<Report>> {
        self.writer.with_conn(|conn| {
            queries::report_query::find_open_by_author(conn, author_steamid, within_minutes)
        })
    }

    fn find_open_against(
        &self,
        target_steamid: &str,
        within_minutes: i64,
    ) -> WardenResult<Vec<Report>> {
        self.writer.with_conn(|conn| {
            queries::report_query::find_open_against(conn, target_steamid, within_minutes)
        })
    }

    fn mark_cancelled(
        &self,
        identifier: &str,
        by_name: &str,
        by_steamid: &str,
        by_staff: bool,
    ) -> WardenResult<bool> {
        self.writer.with_conn(|conn| {
            queries::report_crud::mark_cancelled(conn, identifier, by_name, by_steamid, by_staff)
        })
    }
}
