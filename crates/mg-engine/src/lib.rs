//! Schema migration engine for migraph.
//!
//! Stores named schema transitions, finds the shortest route from the
//! database's recorded schema to a target over the migration graph, and
//! applies it through an [`mg_db::Executor`]. Registered migrations live in
//! `schema_migration`, applied transitions in `schema_log`.

pub mod caching;
pub mod ddl;
pub mod error;
pub mod migration_log;
pub mod migrator;
pub mod path_finder;
pub mod store;

pub use caching::CachingMigrationStore;
pub use error::{MigrateError, MigrateResult};
pub use migration_log::{DuckDbMigrationLog, MigrationLog};
pub use migrator::{ensure_schema, Migrator};
pub use path_finder::PathFinder;
pub use store::{DuckDbMigrationStore, MigrationStore};

pub use mg_core::{Migration, MigrationLogEntry};
