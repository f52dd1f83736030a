//! # Strata Index
//!
//! Composite-key index facade over pluggable key-value storage.
//!
//! An index entry maps a four-part key (namespace, namespace_a,
//! namespace_b, value_a) to a single string value. The parts are joined
//! with `:` into one storage key; the entry itself lives only in the store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use strata_index::prelude::*;
//!
//! let index = IndexService::builder()
//!     .store(MemoryStore::new())
//!     .build()?;
//! index.boot();
//!
//! // Create never overwrites
//! index.create("user", "email", "id", "alice@example.com", "42")?;
//! index.create("user", "email", "id", "alice@example.com", "99")?;
//! assert_eq!(index.search("user", "email", "id", "alice@example.com")?, "42");
//!
//! // Update never creates
//! index.update("user", "email", "id", "alice@example.com", "43")?;
//!
//! index.delete("user", "email", "id", "alice@example.com")?;
//! assert!(!index.exists("user", "email", "id", "alice@example.com")?);
//!
//! index.shutdown();
//! ```
//!
//! ## Errors
//!
//! - [`Error::Config`] - built without a store
//! - [`Error::NotFound`] - no entry for the key (search, update)
//! - [`Error::Storage`] - any other store failure, passed through unchanged

#![warn(missing_docs)]

mod error;
mod service;

pub mod lifecycle;
pub mod prelude;

pub use error::{Error, Result};
pub use service::{Index, IndexService, IndexServiceBuilder};

// Re-export core types and backends
pub use strata_index_core::{
    storage_key, CompositeKey, KeyValueStore, StoreError, StoreResult, KEY_DELIMITER,
};
pub use strata_index_storage::MemoryStore;
