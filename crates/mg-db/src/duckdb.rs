//! DuckDB executor implementations

use crate::error::{DbError, DbResult};
use crate::executor::Executor;
use duckdb::{Connection, Row, ToSql, Transaction};
use std::path::Path;

/// Open a DuckDB connection (handles the `:memory:` special case)
pub fn open(path: &str) -> DbResult<Connection> {
    if path == ":memory:" {
        Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))
    } else {
        Connection::open(Path::new(path))
            .map_err(|e| DbError::ConnectionError(format!("{e}: {path}")))
    }
}

impl Executor for Connection {
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize> {
        Connection::execute(self, sql, params).map_err(DbError::from)
    }

    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        Connection::execute_batch(self, sql).map_err(DbError::from)
    }

    fn query_map<T, F>(&self, sql: &str, params: &[&dyn ToSql], f: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> duckdb::Result<T>,
    {
        let mut stmt = self.prepare(sql)?;
        let rows = stmt
            .query_map(params, f)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl Executor for Transaction<'_> {
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize> {
        Executor::execute(&**self, sql, params)
    }

    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        Executor::execute_batch(&**self, sql)
    }

    fn query_map<T, F>(&self, sql: &str, params: &[&dyn ToSql], f: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> duckdb::Result<T>,
    {
        Executor::query_map(&**self, sql, params, f)
    }
}

/// Check if a table or view exists.
///
/// Unqualified names are looked up in the `main` schema.
pub fn relation_exists<E: Executor + ?Sized>(exec: &E, name: &str) -> DbResult<bool> {
    let (schema, table) = match name.rfind('.') {
        Some(pos) => (&name[..pos], &name[pos + 1..]),
        None => ("main", name),
    };

    let count = exec
        .query_map(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = ? AND table_name = ?",
            &[&schema, &table],
            |row| row.get::<_, i64>(0),
        )?
        .into_iter()
        .next()
        .unwrap_or(0);

    Ok(count > 0)
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
