//! Route planning over the registered migrations.

use crate::error::{MigrateError, MigrateResult};
use crate::store::MigrationStore;
use mg_core::{Migration, MigrationGraph};

/// Computes minimum-hop migration sequences from a store's contents.
pub struct PathFinder<'s, S: MigrationStore + ?Sized> {
    store: &'s mut S,
}

impl<'s, S: MigrationStore + ?Sized> PathFinder<'s, S> {
    /// Create a path finder reading from `store`.
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// Ordered migrations leading from `from` to `to`.
    ///
    /// Callers handle `from == to` themselves; here it yields an empty path.
    /// Fails with [`MigrateError::NoPath`] when `to` is unreachable.
    pub fn find_path(&mut self, from: &str, to: &str) -> MigrateResult<Vec<Migration>> {
        let graph = MigrationGraph::build(self.store.list_all()?);
        graph
            .find_path(from, to)
            .ok_or_else(|| MigrateError::NoPath {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "path_finder_test.rs"]
mod tests;
