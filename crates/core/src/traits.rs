//! Storage backend contract
//!
//! The index layer talks to storage only through [`KeyValueStore`].
//! Durability, replication and encoding are the backend's concern.

use crate::error::StoreResult;
use std::sync::Arc;

/// Opaque string key-value store
///
/// # Contract
///
/// - `get` returns [`StoreError::NotFound`](crate::StoreError::NotFound)
///   for absent keys, never an empty string
/// - `set` creates or overwrites
/// - `remove` on a missing key is backend-defined: it may succeed or
///   return `NotFound`
///
/// Implementations must be `Send + Sync`; the index layer shares a single
/// store across all callers and adds no locking of its own.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<String>;

    /// Write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Check whether `key` has a value.
    fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Remove the value stored under `key`.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> StoreResult<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        (**self).exists(key)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        (**self).exists(key)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
