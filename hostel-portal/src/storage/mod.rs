//! Key-value snapshot store
//!
//! Holds the session snapshot (`currentUser`, `authToken`,
//! `registeredUsers`) and the self-booked allotment ledger as JSON values. [`MemoryStore`] lives and dies with
//! the process; [`RedbStore`] persists under the work directory.

mod error;
mod redb_store;

pub use error::*;
pub use redb_store::RedbStore;

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Snapshot key for the logged-in user
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Snapshot key for the session token
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Snapshot key for self-registered users
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";
/// Snapshot key for allotments created by student self-bookings
pub const LEDGER_KEY: &str = "allotmentLedger";

const SNAPSHOT_FILE: &str = "snapshot.redb";

pub trait SnapshotStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;
    fn set(&self, key: &str, value: Value) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl dyn SnapshotStore {
    /// Read and deserialize a snapshot value
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a snapshot value
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        self.set(key, serde_json::to_value(value)?)
    }
}

/// Open the store selected by configuration
pub fn open_store(persist: bool, work_dir: &Path) -> StoreResult<Arc<dyn SnapshotStore>> {
    if persist {
        let path = work_dir.join(SNAPSHOT_FILE);
        tracing::info!(path = %path.display(), "Opening persistent snapshot store");
        Ok(Arc::new(RedbStore::open(path)?))
    } else {
        Ok(Arc::new(MemoryStore::new()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
