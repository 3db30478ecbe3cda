//! Public entry point of the migration engine.
//!
//! [`Migrator`] reads the current schema from the log, plans a route to the
//! requested target, and applies each step through the executor it was
//! given. It never opens or commits transactions itself: handing it a
//! [`mg_db::Transaction`] makes a whole run atomic, handing it a bare
//! connection makes every statement auto-commit. [`ensure_schema`] is the
//! transactional one-shot used at application startup.

use crate::caching::CachingMigrationStore;
use crate::ddl::ensure_base_schema;
use crate::error::{MigrateError, MigrateResult};
use crate::migration_log::{DuckDbMigrationLog, MigrationLog};
use crate::path_finder::PathFinder;
use crate::store::{DuckDbMigrationStore, MigrationStore};
use mg_core::Migration;
use mg_db::{Connection, Executor};

/// Registers migrations and moves a database to a target schema.
pub struct Migrator<'e, E: Executor + ?Sized> {
    exec: &'e E,
    store: CachingMigrationStore<DuckDbMigrationStore<'e, E>>,
    log: DuckDbMigrationLog<'e, E>,
}

impl<'e, E: Executor + ?Sized> Migrator<'e, E> {
    /// Create a migrator over `exec`, creating the engine's tables if needed.
    pub fn new(exec: &'e E) -> MigrateResult<Self> {
        ensure_base_schema(exec)?;
        Ok(Self {
            exec,
            store: CachingMigrationStore::new(DuckDbMigrationStore::new(exec)),
            log: DuckDbMigrationLog::new(exec),
        })
    }

    /// Register the migration `origin` -> `destination` with `payload`.
    pub fn register_migration(
        &mut self,
        origin: &str,
        destination: &str,
        payload: &str,
    ) -> MigrateResult<()> {
        let migration = Migration::new(origin, destination, payload)?;
        self.store.register(&migration)
    }

    /// Register an already constructed migration.
    pub fn register(&mut self, migration: &Migration) -> MigrateResult<()> {
        migration.validate()?;
        self.store.register(migration)
    }

    /// Destination of the latest applied migration, or `""` if none.
    pub fn current_schema(&self) -> MigrateResult<String> {
        Ok(self
            .log
            .latest()?
            .map(|entry| entry.destination)
            .unwrap_or_default())
    }

    /// Minimum-hop route between two schemas over the registered migrations.
    pub fn find_path(&mut self, from: &str, to: &str) -> MigrateResult<Vec<Migration>> {
        PathFinder::new(&mut self.store).find_path(from, to)
    }

    /// The steps [`migrate_to`](Self::migrate_to) would apply, without applying them.
    pub fn plan(&mut self, target: &str) -> MigrateResult<Vec<Migration>> {
        let current = self.current_schema()?;
        if current == target {
            return Ok(Vec::new());
        }
        self.find_path(&current, target)
    }

    /// Bring the database to `target`, returning the migrations applied.
    ///
    /// Does nothing when already at `target`. Steps run in order, each
    /// followed by its log entry; the first failure stops the run and is
    /// returned. Steps applied before the failure stay applied unless the
    /// executor is a transaction that the caller rolls back.
    pub fn migrate_to(&mut self, target: &str) -> MigrateResult<Vec<Migration>> {
        let current = self.current_schema()?;
        if current == target {
            log::debug!("Schema already at '{target}'");
            return Ok(Vec::new());
        }

        let path = self.find_path(&current, target)?;
        log::info!(
            "Migrating schema '{current}' -> '{target}' in {} step(s)",
            path.len()
        );

        for migration in &path {
            log::debug!("Applying migration {migration}");
            self.exec
                .execute_batch(&migration.payload)
                .map_err(|source| MigrateError::PayloadFailed {
                    origin: migration.origin.clone(),
                    destination: migration.destination.clone(),
                    source,
                })?;
            self.log.add(&migration.origin, &migration.destination)?;
        }

        log::info!("Schema is now at '{target}'");
        Ok(path)
    }
}

/// Register `migrations` and migrate to `target` inside a single transaction.
///
/// Either every step is committed or, on any error, nothing is: the
/// transaction is rolled back when it is dropped uncommitted.
pub fn ensure_schema(
    conn: &mut Connection,
    migrations: &[Migration],
    target: &str,
) -> MigrateResult<Vec<Migration>> {
    let tx = conn
        .transaction()
        .map_err(|e| MigrateError::TransactionError(format!("BEGIN failed: {e}")))?;

    let applied = {
        let mut migrator = Migrator::new(&tx)?;
        for migration in migrations {
            migrator.register(migration)?;
        }
        migrator.migrate_to(target)?
    };

    tx.commit()
        .map_err(|e| MigrateError::TransactionError(format!("COMMIT failed: {e}")))?;
    Ok(applied)
}

#[cfg(test)]
#[path = "migrator_test.rs"]
mod tests;
