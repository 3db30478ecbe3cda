use super::*;
use crate::ddl::ensure_base_schema;
use crate::store::DuckDbMigrationStore;

/// In-memory store that counts calls reaching it.
#[derive(Default)]
struct CountingStore {
    records: Vec<Migration>,
    registers: usize,
    lists: usize,
}

impl MigrationStore for CountingStore {
    fn register(&mut self, migration: &Migration) -> MigrateResult<()> {
        self.registers += 1;
        match self
            .records
            .iter_mut()
            .find(|m| m.origin == migration.origin && m.destination == migration.destination)
        {
            Some(existing) => existing.payload = migration.payload.clone(),
            None => self.records.push(migration.clone()),
        }
        Ok(())
    }

    fn list_all(&mut self) -> MigrateResult<Vec<Migration>> {
        self.lists += 1;
        Ok(self.records.clone())
    }
}

fn mig(from: &str, to: &str, payload: &str) -> Migration {
    Migration::new(from, to, payload).unwrap()
}

#[test]
fn list_all_is_memoized() {
    let mut store = CachingMigrationStore::new(CountingStore::default());
    store.register(&mig("", "v1", "SELECT 1")).unwrap();

    assert!(!store.is_enumeration_cached());
    assert_eq!(store.list_all().unwrap().len(), 1);
    assert_eq!(store.list_all().unwrap().len(), 1);
    assert!(store.is_enumeration_cached());
    assert_eq!(store.inner().lists, 1);
}

#[test]
fn identical_register_is_a_true_no_op() {
    let mut store = CachingMigrationStore::new(CountingStore::default());
    store.register(&mig("", "v1", "SELECT 1")).unwrap();
    store.list_all().unwrap();

    store.register(&mig("", "v1", "SELECT 1")).unwrap();

    assert_eq!(store.inner().registers, 1, "second register must not write");
    assert!(store.is_enumeration_cached());
    assert_eq!(store.list_all().unwrap().len(), 1);
    assert_eq!(store.inner().lists, 1);
}

#[test]
fn changed_payload_writes_through_and_invalidates() {
    let mut store = CachingMigrationStore::new(CountingStore::default());
    store.register(&mig("", "v1", "SELECT 1")).unwrap();
    store.list_all().unwrap();

    store.register(&mig("", "v1", "SELECT 2")).unwrap();

    assert_eq!(store.inner().registers, 2);
    assert!(!store.is_enumeration_cached());

    let migs = store.list_all().unwrap();
    assert_eq!(store.inner().lists, 2, "next list_all must re-fetch");
    assert_eq!(migs.len(), 1);
    assert_eq!(migs[0].payload, "SELECT 2");
}

#[test]
fn changed_payload_updates_point_lookup() {
    let mut store = CachingMigrationStore::new(CountingStore::default());
    store.register(&mig("", "v1", "SELECT 1")).unwrap();
    store.register(&mig("", "v1", "SELECT 2")).unwrap();

    // Re-registering the newest payload hits the updated lookup entry.
    store.register(&mig("", "v1", "SELECT 2")).unwrap();
    assert_eq!(store.inner().registers, 2);
}

#[test]
fn new_migration_is_appended_to_cached_enumeration() {
    let mut store = CachingMigrationStore::new(CountingStore::default());
    store.register(&mig("", "v1", "SELECT 1")).unwrap();
    store.list_all().unwrap();

    store.register(&mig("v1", "v2", "SELECT 2")).unwrap();

    assert!(store.is_enumeration_cached());
    let migs = store.list_all().unwrap();
    assert_eq!(store.inner().lists, 1);
    assert_eq!(migs.len(), 2);
    assert_eq!(migs[1].destination, "v2");
}

#[test]
fn enumeration_populates_point_lookup() {
    let mut inner = CountingStore::default();
    inner.register(&mig("", "v1", "SELECT 1")).unwrap();
    let mut store = CachingMigrationStore::new(inner);

    store.list_all().unwrap();
    store.register(&mig("", "v1", "SELECT 1")).unwrap();

    assert_eq!(
        store.inner().registers,
        1,
        "pair known from list_all must not be rewritten"
    );
}

#[test]
fn separator_in_identifiers_does_not_collide() {
    let mut store = CachingMigrationStore::new(CountingStore::default());
    store.register(&mig("a:b", "c", "SELECT 1")).unwrap();
    store.register(&mig("a", "b:c", "SELECT 1")).unwrap();

    assert_eq!(store.inner().registers, 2);
    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn invalidate_forces_refetch() {
    let mut store = CachingMigrationStore::new(CountingStore::default());
    store.list_all().unwrap();
    store.invalidate();
    store.list_all().unwrap();
    assert_eq!(store.into_inner().lists, 2);
}

#[test]
fn over_duckdb_store() {
    let conn = mg_db::open(":memory:").unwrap();
    ensure_base_schema(&conn).unwrap();
    let mut store = CachingMigrationStore::new(DuckDbMigrationStore::new(&conn));

    store.register(&mig("", "v1", "SELECT 1")).unwrap();
    store.register(&mig("", "v1", "SELECT 1")).unwrap();
    assert_eq!(store.list_all().unwrap().len(), 1);

    store.register(&mig("", "v1", "SELECT 2")).unwrap();
    assert!(!store.is_enumeration_cached());
    let migs = store.list_all().unwrap();
    assert_eq!(migs.len(), 1);
    assert_eq!(migs[0].payload, "SELECT 2");
}
