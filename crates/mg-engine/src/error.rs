//! Error types for the migration engine.

use mg_core::CoreError;
use mg_db::DbError;
use thiserror::Error;

/// Migration engine errors.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Storage failure from the executor, passed through unchanged.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Invalid migration or manifest data.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The target schema cannot be reached from the current one with the
    /// registered migrations (M001).
    #[error("[M001] No migration path found from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    /// A migration's payload failed to apply; later steps were not attempted (M002).
    #[error("[M002] Migration '{origin}' -> '{destination}' failed: {source}")]
    PayloadFailed {
        origin: String,
        destination: String,
        #[source]
        source: DbError,
    },

    /// Transaction management error (M003).
    #[error("[M003] Migration transaction failed: {0}")]
    TransactionError(String),
}

impl MigrateError {
    /// True when the failure means "no known route to the target", as opposed
    /// to a storage or execution problem.
    pub fn is_no_path(&self) -> bool {
        matches!(self, MigrateError::NoPath { .. })
    }
}

/// Result type alias for [`MigrateError`].
pub type MigrateResult<T> = Result<T, MigrateError>;
