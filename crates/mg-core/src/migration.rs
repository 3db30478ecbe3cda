//! Migration edges and applied-transition log entries.
//!
//! A [`Migration`] is one directed edge of the schema graph: it moves a
//! database from `origin` to `destination` by running `payload`. The empty
//! origin stands for a database with no schema applied yet.

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fmt;

/// A registered transition between two schema identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Schema the migration starts from (`""` for an empty database)
    pub origin: String,

    /// Schema the migration produces (never empty)
    pub destination: String,

    /// Statements executed to perform the transition
    pub payload: String,
}

impl Migration {
    /// Create a migration, rejecting edges that can never be applied.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        payload: impl Into<String>,
    ) -> CoreResult<Self> {
        let migration = Self {
            origin: origin.into(),
            destination: destination.into(),
            payload: payload.into(),
        };
        migration.validate()?;
        Ok(migration)
    }

    /// Check the edge invariants: a non-empty destination distinct from the origin.
    pub fn validate(&self) -> CoreResult<()> {
        let reason = if self.destination.is_empty() {
            "destination schema must not be empty"
        } else if self.origin == self.destination {
            "origin and destination must differ"
        } else {
            return Ok(());
        };
        Err(CoreError::InvalidMigration {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            reason: reason.to_string(),
        })
    }

    /// Lookup key identifying this migration's (origin, destination) pair
    pub fn key(&self) -> MigrationKey {
        MigrationKey::new(&self.origin, &self.destination)
    }

    /// SHA-256 of the payload, hex encoded
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.payload.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl fmt::Display for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.origin, self.destination)
    }
}

/// Unambiguous string key for an (origin, destination) pair.
///
/// Each component is hex encoded and the two are joined with `:`. Hex output
/// never contains the separator, so identifiers with arbitrary characters
/// cannot produce the key of a different pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MigrationKey(String);

impl MigrationKey {
    /// Build the key for `origin` -> `destination`
    pub fn new(origin: &str, destination: &str) -> Self {
        let mut key = String::with_capacity(2 * (origin.len() + destination.len()) + 1);
        key.push_str(&hex::encode(origin));
        key.push(':');
        key.push_str(&hex::encode(destination));
        Self(key)
    }

    /// Return the encoded key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MigrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One applied transition, as recorded in the migration log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationLogEntry {
    /// When the transition was applied
    pub utc_time: DateTime<Utc>,

    /// Schema before the transition
    pub origin: String,

    /// Schema after the transition
    pub destination: String,
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
