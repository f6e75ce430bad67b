//! Persisted, append-only broadcast collection.
//!
//! The collection is one JSON array under a fixed store key. Appending reads
//! the whole array, pushes, and writes it back. That read-modify-write is not
//! safe under concurrent writers; a single writer is assumed. Swapping in an
//! atomic backend only requires another [`BroadcastRepository`].

use chrono::{DateTime, Utc};

use super::record::BroadcastRecord;
use super::BroadcastError;
use crate::config::BroadcastConfig;
use crate::domain::Position;
use crate::store::KeyValueStore;

/// Storage seam for broadcast records.
pub trait BroadcastRepository {
    /// All records, oldest first. A collection that was never written is empty.
    fn load(&self) -> Result<Vec<BroadcastRecord>, BroadcastError>;

    /// Persist `record` at the end of the collection; returns the new length.
    fn append(&self, record: BroadcastRecord) -> Result<usize, BroadcastError>;
}

/// Read-modify-write repository over a key-value store.
#[derive(Debug)]
pub struct KvBroadcastRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvBroadcastRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> BroadcastRepository for KvBroadcastRepository<S> {
    fn load(&self) -> Result<Vec<BroadcastRecord>, BroadcastError> {
        match self.store.get(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(BroadcastError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    fn append(&self, record: BroadcastRecord) -> Result<usize, BroadcastError> {
        // A corrupt collection fails here, before anything is written.
        let mut records = self.load()?;
        records.push(record);
        let encoded = serde_json::to_string(&records).map_err(BroadcastError::Encode)?;
        self.store.set(&self.key, &encoded)?;
        Ok(records.len())
    }
}

/// Validating front for a repository.
pub struct BroadcastLog {
    repo: Box<dyn BroadcastRepository + Send>,
    max_message_chars: usize,
}

impl BroadcastLog {
    pub fn new(repo: impl BroadcastRepository + Send + 'static, max_message_chars: usize) -> Self {
        Self {
            repo: Box::new(repo),
            max_message_chars,
        }
    }

    /// Log over a key-value store, keyed and limited by `config`.
    pub fn with_store<S>(store: S, config: &BroadcastConfig) -> Self
    where
        S: KeyValueStore + Send + 'static,
    {
        Self::new(
            KvBroadcastRepository::new(store, config.namespace.clone()),
            config.max_message_chars,
        )
    }

    pub fn max_message_chars(&self) -> usize {
        self.max_message_chars
    }

    /// Validate and persist one broadcast. Nothing is written on error.
    pub fn append(
        &self,
        position: Position,
        raw_message: &str,
        now: DateTime<Utc>,
    ) -> Result<BroadcastRecord, BroadcastError> {
        let record = BroadcastRecord::new(position, raw_message, now, self.max_message_chars)?;
        let count = self.repo.append(record.clone())?;
        ::log::info!(
            "broadcast appended for {} ({} stored)",
            record.position().symbol,
            count
        );
        Ok(record)
    }

    pub fn records(&self) -> Result<Vec<BroadcastRecord>, BroadcastError> {
        self.repo.load()
    }
}

impl std::fmt::Debug for BroadcastLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastLog")
            .field("max_message_chars", &self.max_message_chars)
            .finish_non_exhaustive()
    }
}
