//! Append-only history of applied migrations.
//!
//! The current schema of a database is the destination of the latest entry,
//! or the empty string when nothing has been applied.

use crate::error::MigrateResult;
use chrono::{NaiveDateTime, Utc};
use mg_core::MigrationLogEntry;
use mg_db::Executor;

/// Durable log of applied transitions.
pub trait MigrationLog {
    /// Append an entry for `origin` -> `destination`, stamped with the current UTC time.
    fn add(&mut self, origin: &str, destination: &str) -> MigrateResult<()>;

    /// The most recently applied transition, or `None` for an empty log.
    fn latest(&self) -> MigrateResult<Option<MigrationLogEntry>>;
}

/// Migration log backed by the `schema_log` table.
///
/// Entries reference `schema_migration`, so only registered pairs can be logged.
pub struct DuckDbMigrationLog<'e, E: Executor + ?Sized> {
    exec: &'e E,
}

impl<'e, E: Executor + ?Sized> DuckDbMigrationLog<'e, E> {
    /// Create a log over `exec`. The base schema must already exist.
    pub fn new(exec: &'e E) -> Self {
        Self { exec }
    }
}

impl<E: Executor + ?Sized> MigrationLog for DuckDbMigrationLog<'_, E> {
    fn add(&mut self, origin: &str, destination: &str) -> MigrateResult<()> {
        // Never stamp earlier than the previous entry, even if the clock went back.
        let now = Utc::now();
        let utc_time = match self.latest()? {
            Some(prev) if prev.utc_time > now => prev.utc_time,
            _ => now,
        };

        self.exec.execute(
            "INSERT INTO schema_log (utc_time, origin, destination) VALUES (?, ?, ?)",
            &[&utc_time.naive_utc(), &origin, &destination],
        )?;
        Ok(())
    }

    fn latest(&self) -> MigrateResult<Option<MigrationLogEntry>> {
        // rowid breaks ties between entries appended within the same microsecond.
        let entry = self.exec.query_optional(
            "SELECT utc_time, origin, destination FROM schema_log
             ORDER BY utc_time DESC, rowid DESC
             LIMIT 1",
            &[],
            |row| {
                Ok(MigrationLogEntry {
                    utc_time: row.get::<_, NaiveDateTime>(0)?.and_utc(),
                    origin: row.get(1)?,
                    destination: row.get(2)?,
                })
            },
        )?;
        Ok(entry)
    }
}

#[cfg(test)]
#[path = "migration_log_test.rs"]
mod tests;
