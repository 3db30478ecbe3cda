//! mg-db - Executor handle for migraph
//!
//! This crate provides the `Executor` trait, the narrow execute/query
//! capability the migration engine runs against, and its implementations
//! for DuckDB connections and transactions.

pub mod duckdb;
pub mod error;
pub mod executor;

pub use crate::duckdb::{open, relation_exists};
pub use error::{DbError, DbResult};
pub use executor::Executor;

pub use ::duckdb::{Connection, Row, ToSql, Transaction};
