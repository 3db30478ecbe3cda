//! Memoizing decorator over a [`MigrationStore`].
//!
//! The cache is process-local and lives as long as the store value. It is
//! never authoritative: a conflicting overwrite drops the memoized
//! enumeration so the next [`list_all`](MigrationStore::list_all) goes back
//! to the wrapped store.

use crate::error::MigrateResult;
use crate::store::MigrationStore;
use mg_core::{Migration, MigrationKey};
use std::collections::HashMap;

/// Caches the enumeration and a point-lookup index of the wrapped store.
pub struct CachingMigrationStore<S: MigrationStore> {
    inner: S,
    by_key: HashMap<MigrationKey, Migration>,
    list: Option<Vec<Migration>>,
}

impl<S: MigrationStore> CachingMigrationStore<S> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            by_key: HashMap::new(),
            list: None,
        }
    }

    /// Whether `list_all` would currently be answered from memory.
    pub fn is_enumeration_cached(&self) -> bool {
        self.list.is_some()
    }

    /// Drop everything cached.
    pub fn invalidate(&mut self) {
        self.list = None;
        self.by_key.clear();
    }

    /// Borrow the wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the decorator.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: MigrationStore> MigrationStore for CachingMigrationStore<S> {
    fn register(&mut self, migration: &Migration) -> MigrateResult<()> {
        let key = migration.key();
        let replacing = match self.by_key.get(&key) {
            Some(cached) if cached.payload == migration.payload => {
                log::debug!("Migration {migration} unchanged, skipping write");
                return Ok(());
            }
            Some(_) => true,
            None => false,
        };

        self.inner.register(migration)?;

        if replacing {
            log::debug!("Migration {migration} replaced, dropping cached enumeration");
            self.list = None;
        } else if let Some(list) = &mut self.list {
            list.push(migration.clone());
        }
        self.by_key.insert(key, migration.clone());
        Ok(())
    }

    fn list_all(&mut self) -> MigrateResult<Vec<Migration>> {
        if let Some(list) = &self.list {
            return Ok(list.clone());
        }

        let list = self.inner.list_all()?;
        for migration in &list {
            self.by_key.insert(migration.key(), migration.clone());
        }
        self.list = Some(list.clone());
        Ok(list)
    }
}

#[cfg(test)]
#[path = "caching_test.rs"]
mod tests;
