//! Unified error types for the index service.
//!
//! Store failures are classified into exactly two groups: the not-found
//! signal, which becomes [`Error::NotFound`] carrying the composite storage
//! key, and everything else, which is passed through as [`Error::Storage`].

use strata_index_core::StoreError;
use thiserror::Error;

/// All index service errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Service was built without a required dependency
    #[error("invalid config: {0}")]
    Config(String),

    /// No entry exists for the composite key
    #[error("not found: {key}")]
    NotFound {
        /// Serialized composite key
        key: String,
    },

    /// Any other failure reported by the store
    #[error("storage error: {source}")]
    Storage {
        /// Underlying store error, unmodified
        #[from]
        source: StoreError,
    },
}

/// Result type for index service operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage { .. })
    }

    /// The composite storage key, for not-found errors.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::NotFound { key } => Some(key),
            _ => None,
        }
    }
}
