//! In-memory key-value store
//!
//! DashMap with FxHash: sharded writes, lock-free reads, O(1) lookups.
//! Nothing is persisted; all entries are lost when the store is dropped.
//!
//! # Remove semantics
//!
//! | Constructor | `remove` of missing key |
//! |-------------|-------------------------|
//! | `MemoryStore::new()` | `Ok(())` |
//! | `MemoryStore::strict()` | `Err(StoreError::NotFound)` |

use dashmap::DashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use strata_index_core::{KeyValueStore, StoreError, StoreResult};
use tracing::trace;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Sharded in-memory [`KeyValueStore`]
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - get()/exists(): lock-free read via DashMap
/// - set()/remove(): only lock the target shard
///
/// # Example
///
/// ```ignore
/// use strata_index_storage::MemoryStore;
/// use strata_index_core::KeyValueStore;
///
/// let store = MemoryStore::new();
/// store.set("ns:a:b:v", "target")?;
/// assert_eq!(store.get("ns:a:b:v")?, "target");
/// ```
pub struct MemoryStore {
    data: DashMap<String, String, FxBuildHasher>,
    /// Removing a missing key is reported as NotFound
    strict_remove: bool,
}

impl MemoryStore {
    /// Create an empty store whose `remove` ignores missing keys
    pub fn new() -> Self {
        Self {
            data: DashMap::with_hasher(FxBuildHasher::default()),
            strict_remove: false,
        }
    }

    /// Create an empty store whose `remove` fails on missing keys
    pub fn strict() -> Self {
        Self {
            strict_remove: true,
            ..Self::new()
        }
    }

    /// Create with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: DashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
            strict_remove: false,
        }
    }

    /// Whether `remove` of a missing key is an error
    pub fn is_strict(&self) -> bool {
        self.strict_remove
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop all entries
    pub fn clear(&self) {
        self.data.clear();
    }

    /// All stored keys, sorted
    ///
    /// NOTE: O(n) collect + sort. Meant for tests and diagnostics.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl KeyValueStore for MemoryStore {
    #[inline]
    fn get(&self, key: &str) -> StoreResult<String> {
        trace!(key, "memory store get");
        self.data
            .get(key)
            .map(|value| value.value().clone())
            .ok_or_else(|| StoreError::not_found(key))
    }

    #[inline]
    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        trace!(key, "memory store set");
        self.data.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    #[inline]
    fn exists(&self, key: &str) -> StoreResult<bool> {
        trace!(key, "memory store exists");
        Ok(self.data.contains_key(key))
    }

    #[inline]
    fn remove(&self, key: &str) -> StoreResult<()> {
        trace!(key, "memory store remove");
        match self.data.remove(key) {
            Some(_) => Ok(()),
            None if self.strict_remove => Err(StoreError::not_found(key)),
            None => Ok(()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.len())
            .field("strict_remove", &self.strict_remove)
            .finish()
    }
}
