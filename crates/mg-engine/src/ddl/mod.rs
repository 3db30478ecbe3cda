//! Base schema owned by the migration engine.
//!
//! Two tables: `schema_migration` holds the registered migrations keyed by
//! (origin, destination), `schema_log` is the append-only history of
//! applied transitions. Both are created with `IF NOT EXISTS`, so
//! [`ensure_base_schema`] is safe to run on every startup.

use crate::error::MigrateResult;
use mg_db::Executor;

/// DDL for the migration and log tables.
pub const BASE_SCHEMA: &str = include_str!("base_schema.sql");

/// Create the engine's tables if they do not exist yet.
pub fn ensure_base_schema<E: Executor + ?Sized>(exec: &E) -> MigrateResult<()> {
    exec.execute_batch(BASE_SCHEMA)?;
    Ok(())
}
