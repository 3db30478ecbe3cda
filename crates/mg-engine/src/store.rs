//! Durable set of registered migrations.
//!
//! [`MigrationStore`] is the abstraction the orchestrator and path finder
//! work against. [`DuckDbMigrationStore`] persists to `schema_migration`;
//! [`crate::caching::CachingMigrationStore`] wraps any store to avoid
//! repeated full scans.

use crate::error::MigrateResult;
use mg_core::Migration;
use mg_db::Executor;

/// Keyed set of migrations, at most one per (origin, destination) pair.
pub trait MigrationStore {
    /// Persist `migration`, replacing any record with the same pair.
    ///
    /// Registering an identical payload again must be harmless.
    fn register(&mut self, migration: &Migration) -> MigrateResult<()>;

    /// Every registered migration. Callers must not rely on the order.
    fn list_all(&mut self) -> MigrateResult<Vec<Migration>>;
}

/// Migration store backed by the `schema_migration` table.
pub struct DuckDbMigrationStore<'e, E: Executor + ?Sized> {
    exec: &'e E,
}

impl<'e, E: Executor + ?Sized> DuckDbMigrationStore<'e, E> {
    /// Create a store over `exec`. The base schema must already exist.
    pub fn new(exec: &'e E) -> Self {
        Self { exec }
    }

    /// Stored payload for a pair, if any.
    fn stored_payload(&self, origin: &str, destination: &str) -> MigrateResult<Option<String>> {
        let payload = self.exec.query_optional(
            "SELECT payload FROM schema_migration WHERE origin = ? AND destination = ?",
            &[&origin, &destination],
            |row| row.get::<_, String>(0),
        )?;
        Ok(payload)
    }
}

impl<E: Executor + ?Sized> MigrationStore for DuckDbMigrationStore<'_, E> {
    fn register(&mut self, migration: &Migration) -> MigrateResult<()> {
        let origin = migration.origin.as_str();
        let destination = migration.destination.as_str();
        let payload = migration.payload.as_str();

        // Rows referenced by schema_log are only written when the payload
        // actually changes.
        match self.stored_payload(origin, destination)? {
            Some(stored) if stored == payload => {}
            Some(_) => {
                self.exec.execute(
                    "UPDATE schema_migration SET payload = ? WHERE origin = ? AND destination = ?",
                    &[&payload, &origin, &destination],
                )?;
            }
            None => {
                self.exec.execute(
                    "INSERT INTO schema_migration (origin, destination, payload) VALUES (?, ?, ?)",
                    &[&origin, &destination, &payload],
                )?;
            }
        }
        Ok(())
    }

    fn list_all(&mut self) -> MigrateResult<Vec<Migration>> {
        let migrations = self.exec.query_map(
            "SELECT origin, destination, payload FROM schema_migration ORDER BY origin, destination",
            &[],
            |row| {
                Ok(Migration {
                    origin: row.get(0)?,
                    destination: row.get(1)?,
                    payload: row.get(2)?,
                })
            },
        )?;
        Ok(migrations)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
