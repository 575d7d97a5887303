//! redb-backed key-value store adapter
//!
//! # Layout
//!
//! One `collections` table: key = collection name, value = the whole
//! collection as a JSON array. This mirrors the localStorage substrate the
//! simulation models — `users`, `hotels` and `rooms` each live under one
//! key and are read and rewritten wholesale.
//!
//! # Contract
//!
//! - `read` never fails: a missing key, a backend error or undecodable
//!   JSON is logged and yields an empty collection.
//! - Writes go through [`StagedWrite`]: every mutation stages the full set
//!   of collections it touches and commits them in ONE redb write
//!   transaction, so cross-collection updates (account + hotel, cascade
//!   deletes, data + derived score) either all land or none do.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::AppError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table holding all collections: key = collection name, value = JSON array
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Collection key for users
pub const USERS: &str = "users";
/// Collection key for hotels
pub const HOTELS: &str = "hotels";
/// Collection key for rooms
pub const ROOMS: &str = "rooms";

const ALL_COLLECTIONS: [&str; 3] = [USERS, HOTELS, ROOMS];

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
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

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::storage(err.to_string())
    }
}

/// A set of collection writes committed as one transaction
#[derive(Debug, Default)]
pub struct StagedWrite {
    entries: Vec<(&'static str, Vec<u8>)>,
}

impl StagedWrite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a full collection under its key
    pub fn set<T: Serialize>(&mut self, key: &'static str, items: &[T]) -> StoreResult<()> {
        self.entries.push((key, serde_json::to_vec(items)?));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key-value store backed by redb
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Database>,
}

impl KvStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, throwaway demos)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        // Create the table up front so reads never hit a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read a collection; missing or corrupt data yields an empty list
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.read_raw(key) {
            Ok(None) => Vec::new(),
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(items) => items,
                Err(e) => {
                    tracing::error!("Corrupt data under key '{}', treating as empty: {}", key, e);
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::error!("Failed to read key '{}', treating as empty: {}", key, e);
                Vec::new()
            }
        }
    }

    fn read_raw(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    /// Write a single collection
    pub fn write<T: Serialize>(&self, key: &'static str, items: &[T]) -> StoreResult<()> {
        let mut staged = StagedWrite::new();
        staged.set(key, items)?;
        self.commit(staged)
    }

    /// Commit a staged set of collection writes atomically
    pub fn commit(&self, staged: StagedWrite) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            for (key, bytes) in &staged.entries {
                table.insert(*key, bytes.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove every collection
    pub fn clear_all(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            for key in ALL_COLLECTIONS {
                table.remove(key)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}
