//! Executor trait definition

use crate::error::DbResult;
use duckdb::{Row, ToSql};

/// The execute/query capability the migration engine needs from its host.
///
/// Both a raw connection and an open transaction on it implement this trait
/// identically. Whether a sequence of calls is atomic is decided by which of
/// the two the caller hands out, never by the code using the executor.
pub trait Executor {
    /// Execute one parameterized statement, returns affected rows
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize>;

    /// Execute multiple `;`-separated statements
    fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Run a row-returning query and map every row through `f`.
    ///
    /// `f` reads columns positionally with `row.get::<_, T>(idx)`.
    fn query_map<T, F>(&self, sql: &str, params: &[&dyn ToSql], f: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> duckdb::Result<T>;

    /// Run a query expected to return at most one row.
    fn query_optional<T, F>(&self, sql: &str, params: &[&dyn ToSql], f: F) -> DbResult<Option<T>>
    where
        F: FnMut(&Row<'_>) -> duckdb::Result<T>,
    {
        Ok(self.query_map(sql, params, f)?.into_iter().next())
    }
}

impl<E: Executor + ?Sized> Executor for &E {
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize> {
        (**self).execute(sql, params)
    }

    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        (**self).execute_batch(sql)
    }

    fn query_map<T, F>(&self, sql: &str, params: &[&dyn ToSql], f: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> duckdb::Result<T>,
    {
        (**self).query_map(sql, params, f)
    }
}
