//! Errors surfaced by key-value store backends
//!
//! Backends report absence through [`StoreError::NotFound`]; every other
//! variant is an opaque failure that the index layer passes through.

use thiserror::Error;

/// Error returned by a [`KeyValueStore`](crate::KeyValueStore) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The key has no value in the store
    #[error("key not found: {key}")]
    NotFound {
        /// Storage key that was looked up
        key: String,
    },

    /// Backend could not be reached (connection refused, closed pool, ...)
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Stored data failed validation
    #[error("corruption: {0}")]
    Corruption(String),

    /// Any other backend failure
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Build a not-found error for a storage key.
    pub fn not_found(key: impl Into<String>) -> Self {
        StoreError::NotFound { key: key.into() }
    }

    /// Check if this is the store's not-found signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
