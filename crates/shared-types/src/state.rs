//! # World State
//!
//! The ordered key-value store every component persists into, and the
//! per-invocation overlay that gives each call read-your-writes and an
//! all-or-nothing commit.
//!
//! ## Commit protocol
//!
//! A [`TransactionOverlay`] buffers writes and records the version of every
//! committed key it reads. [`TransactionOverlay::commit`] takes the store's
//! write lock, re-checks those versions and only then applies the buffered
//! writes. If another overlay committed a change to any key this one read,
//! the commit fails with [`StateError::Conflict`] and nothing is written.
//! Two concurrent calls that both advance the same nonce therefore cannot
//! both succeed.
//!
//! A prefix scan records every key it returned plus the prefix itself. A key
//! that appears under a scanned prefix after the scan is a conflict too.

use crate::errors::StateError;
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Key-value store port.
///
/// All methods take `&self`; implementations use interior mutability.
pub trait WorldState: Send + Sync {
    /// Point lookup.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Insert or overwrite.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// Remove; deleting an absent key is not an error.
    fn delete_state(&self, key: &str) -> Result<(), StateError>;

    /// All entries whose key starts with `prefix`, ordered by key.
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StateError>;
}

#[derive(Default)]
struct Store {
    entries: BTreeMap<String, Vec<u8>>,
    // Survives deletion so a delete-then-recreate is still seen as a change.
    versions: HashMap<String, u64>,
}

impl Store {
    fn version(&self, key: &str) -> u64 {
        self.versions.get(key).copied().unwrap_or(0)
    }

    fn bump(&mut self, key: &str) {
        *self.versions.entry(key.to_string()).or_insert(0) += 1;
    }

    fn live_under<'s>(
        &'s self,
        prefix: &'s str,
    ) -> impl Iterator<Item = (&'s String, &'s Vec<u8>)> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(move |(k, _)| k.starts_with(prefix))
    }
}

/// In-memory committed state.
#[derive(Default)]
pub struct InMemoryWorldState {
    store: RwLock<Store>,
}

impl InMemoryWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.store.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every live entry, for before/after comparisons.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.store.read().entries.clone()
    }

    fn read_versioned(&self, key: &str) -> (Option<Vec<u8>>, u64) {
        let store = self.store.read();
        (store.entries.get(key).cloned(), store.version(key))
    }

    /// Entries under `prefix` with their versions, read under one lock.
    fn scan_versioned(&self, prefix: &str) -> Vec<(String, Vec<u8>, u64)> {
        let store = self.store.read();
        store
            .live_under(prefix)
            .map(|(k, v)| (k.clone(), v.clone(), store.version(k)))
            .collect()
    }

    fn apply(
        &self,
        reads: &HashMap<String, u64>,
        scanned: &BTreeSet<String>,
        writes: BTreeMap<String, Option<Vec<u8>>>,
    ) -> Result<(), StateError> {
        let mut store = self.store.write();

        for (key, seen) in reads {
            if store.version(key) != *seen {
                tracing::warn!(key = %key.escape_debug(), "commit rejected: key changed since read");
                return Err(StateError::Conflict { key: key.clone() });
            }
        }
        for prefix in scanned {
            let phantom = store
                .live_under(prefix)
                .find(|(k, _)| !reads.contains_key(*k))
                .map(|(k, _)| k.clone());
            if let Some(key) = phantom {
                tracing::warn!(key = %key.escape_debug(), "commit rejected: key appeared under scanned prefix");
                return Err(StateError::Conflict { key });
            }
        }

        for (key, value) in writes {
            match value {
                Some(value) => {
                    store.entries.insert(key.clone(), value);
                }
                None => {
                    store.entries.remove(&key);
                }
            }
            store.bump(&key);
        }
        Ok(())
    }
}

impl WorldState for InMemoryWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.store.read().entries.get(key).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        let mut store = self.store.write();
        store.entries.insert(key.to_string(), value);
        store.bump(key);
        Ok(())
    }

    fn delete_state(&self, key: &str) -> Result<(), StateError> {
        let mut store = self.store.write();
        if store.entries.remove(key).is_some() {
            store.bump(key);
        }
        Ok(())
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StateError> {
        let store = self.store.read();
        Ok(store
            .live_under(prefix)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

/// Write buffer for a single invocation.
///
/// Dropping an overlay without calling [`commit`](Self::commit) discards
/// every buffered write.
pub struct TransactionOverlay<'a> {
    base: &'a InMemoryWorldState,
    writes: Mutex<BTreeMap<String, Option<Vec<u8>>>>,
    reads: Mutex<HashMap<String, u64>>,
    scanned: Mutex<BTreeSet<String>>,
}

impl<'a> TransactionOverlay<'a> {
    pub fn new(base: &'a InMemoryWorldState) -> Self {
        Self {
            base,
            writes: Mutex::new(BTreeMap::new()),
            reads: Mutex::new(HashMap::new()),
            scanned: Mutex::new(BTreeSet::new()),
        }
    }

    /// Number of buffered writes and deletes.
    pub fn pending_writes(&self) -> usize {
        self.writes.lock().len()
    }

    fn record_read(&self, key: &str, version: u64) {
        self.reads.lock().entry(key.to_string()).or_insert(version);
    }

    /// Publishes buffered writes if no key read by this overlay has changed.
    pub fn commit(self) -> Result<(), StateError> {
        let reads = self.reads.into_inner();
        let scanned = self.scanned.into_inner();
        let writes = self.writes.into_inner();
        self.base.apply(&reads, &scanned, writes)
    }
}

impl WorldState for TransactionOverlay<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        if let Some(buffered) = self.writes.lock().get(key) {
            return Ok(buffered.clone());
        }
        let (value, version) = self.base.read_versioned(key);
        self.record_read(key, version);
        Ok(value)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        self.writes.lock().insert(key.to_string(), Some(value));
        Ok(())
    }

    fn delete_state(&self, key: &str) -> Result<(), StateError> {
        self.writes.lock().insert(key.to_string(), None);
        Ok(())
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StateError> {
        let mut merged: BTreeMap<String, Vec<u8>> = BTreeMap::new();
        for (key, value, version) in self.base.scan_versioned(prefix) {
            self.record_read(&key, version);
            merged.insert(key, value);
        }
        self.scanned.lock().insert(prefix.to_string());

        let writes = self.writes.lock();
        for (key, value) in writes.range(prefix.to_string()..) {
            if !key.starts_with(prefix) {
                break;
            }
            match value {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }
        Ok(merged.into_iter().collect())
    }
}
