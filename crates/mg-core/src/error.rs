//! Error types for mg-core

use thiserror::Error;

/// Core error type for migraph
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: A migration violates the edge invariants
    #[error("[C001] Invalid migration '{origin}' -> '{destination}': {reason}")]
    InvalidMigration {
        origin: String,
        destination: String,
        reason: String,
    },

    /// C002: Manifest file not found
    #[error("[C002] Migration manifest not found: {path}")]
    ManifestNotFound { path: String },

    /// C003: Manifest YAML could not be parsed
    #[error("[C003] Failed to parse migration manifest: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    /// C004: Manifest parsed but is not usable
    #[error("[C004] Invalid migration manifest: {message}")]
    ManifestInvalid { message: String },

    /// C005: IO error with file path context
    #[error("[C005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
