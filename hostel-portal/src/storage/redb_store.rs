//! redb-backed snapshot store
//!
//! One table, `snapshots`, keyed by snapshot key with JSON bytes as value.
//! Every `set`/`remove` commits its own write transaction.

use redb::{Database, ReadableDatabase, TableDefinition};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

use super::{SnapshotStore, StoreResult};

const SNAPSHOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("snapshots");

#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path.as_ref())?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SNAPSHOTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl SnapshotStore for RedbStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SNAPSHOTS_TABLE)?;
        match table.get(key)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let bytes = serde_json::to_vec(&value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SNAPSHOTS_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SNAPSHOTS_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let store = RedbStore::open_in_memory().unwrap();
        assert_eq!(store.get("authToken").unwrap(), None);

        store.set("authToken", json!("abc")).unwrap();
        assert_eq!(store.get("authToken").unwrap(), Some(json!("abc")));

        store.set("authToken", json!("def")).unwrap();
        assert_eq!(store.get("authToken").unwrap(), Some(json!("def")));

        store.remove("authToken").unwrap();
        assert_eq!(store.get("authToken").unwrap(), None);
        // removing a missing key is fine
        store.remove("authToken").unwrap();
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("snapshot.redb");
        {
            let store = RedbStore::open(&path).unwrap();
            store
                .set("currentUser", json!({ "username": "admin", "type": "admin" }))
                .unwrap();
        }
        let store = RedbStore::open(&path).unwrap();
        assert_eq!(
            store.get("currentUser").unwrap(),
            Some(json!({ "username": "admin", "type": "admin" }))
        );
    }
}
