//! Error types for mg-db

use thiserror::Error;

/// Executor operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Statement execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Table not found (D003)
    #[error("[D003] Table or view not found: {0}")]
    TableNotFound(String),

    /// Row could not be decoded into the requested type (D004)
    #[error("[D004] Failed to read row: {0}")]
    RowError(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        // duckdb::Error carries no structured catalog variants, so missing
        // relations are recognised by message.
        let msg = err.to_string();
        match err {
            duckdb::Error::FromSqlConversionFailure(..)
            | duckdb::Error::InvalidColumnIndex(_)
            | duckdb::Error::InvalidColumnName(_)
            | duckdb::Error::InvalidColumnType(..) => DbError::RowError(msg),
            _ if msg.contains("Table with name")
                || msg.contains("View with name")
                || msg.contains("Table or view with name")
                || (msg.contains("Catalog Error")
                    && msg.contains("Table")
                    && msg.contains("not found")) =>
            {
                DbError::TableNotFound(msg)
            }
            _ => DbError::ExecutionError(msg),
        }
    }
}
