//! redb-based keyed-blob store
//!
//! # Table
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `slots` | collection key | JSON bytes | Named blobs, written wholesale |
//!
//! One named slot holds one JSON document (usually an array of records).
//! Reads and writes are wholesale: a write replaces the entire blob and
//! the last writer wins. There is no partial update and no indexing —
//! this mirrors the key-value persistence model the application was
//! built on.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default: once `commit()`
//! returns the blob is on disk, and the file is always in a consistent
//! state (copy-on-write with atomic pointer swap).

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for named blobs: key = slot name, value = JSON bytes
const SLOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("slots");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for shared::AppError {
    fn from(e: StorageError) -> Self {
        shared::AppError::database(e.to_string())
    }
}

/// Keyed-blob store backed by redb
#[derive(Debug, Clone)]
pub struct KvStore {
    db: Arc<Database>,
}

impl KvStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Read a named blob, `None` if the slot has never been written
    pub fn read_blob<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;
        match table.get(key)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Write a named blob wholesale, replacing any previous value
    pub fn write_blob<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SLOTS_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove a named blob. Returns whether it existed.
    pub fn delete_blob(&self, key: &str) -> StorageResult<bool> {
        let write_txn = self.db.begin_write()?;
        let mut table = write_txn.open_table(SLOTS_TABLE)?;
        let existed = table.remove(key)?.is_some();
        drop(table);
        write_txn.commit()?;
        Ok(existed)
    }

    /// Read a collection slot, defaulting to an empty list for a slot
    /// that has never been written
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Vec<T>> {
        Ok(self.read_blob(key)?.unwrap_or_default())
    }

    /// Replace a collection slot wholesale
    pub fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> StorageResult<()> {
        self.write_blob(key, &items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        value: i64,
    }

    fn record(id: &str, value: i64) -> Record {
        Record {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn unwritten_collection_reads_empty() {
        let kv = KvStore::open_in_memory().unwrap();
        let items: Vec<Record> = kv.read_collection("clients").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn write_is_wholesale_last_writer_wins() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.write_collection("items", &[record("a", 1), record("b", 2)])
            .unwrap();
        // Second write replaces the whole blob, not merges
        kv.write_collection("items", &[record("c", 3)]).unwrap();

        let items: Vec<Record> = kv.read_collection("items").unwrap();
        assert_eq!(items, vec![record("c", 3)]);
    }

    #[test]
    fn delete_blob_reports_existence() {
        let kv = KvStore::open_in_memory().unwrap();
        assert!(!kv.delete_blob("pet-photos-x").unwrap());
        kv.write_blob("pet-photos-x", &vec!["data:image/png;base64,AAA"])
            .unwrap();
        assert!(kv.delete_blob("pet-photos-x").unwrap());
        assert!(
            kv.read_blob::<Vec<String>>("pet-photos-x")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salon.redb");
        {
            let kv = KvStore::open(&path).unwrap();
            kv.write_collection("staff", &[record("g1", 42)]).unwrap();
        }
        let kv = KvStore::open(&path).unwrap();
        let items: Vec<Record> = kv.read_collection("staff").unwrap();
        assert_eq!(items, vec![record("g1", 42)]);
    }
}
