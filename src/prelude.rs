//! Convenient imports for strata-index.
//!
//! ```ignore
//! use strata_index::prelude::*;
//!
//! let index = IndexService::in_memory();
//! index.create("ns", "a", "b", "v", "target")?;
//! ```

// Main entry point
pub use crate::service::{Index, IndexService, IndexServiceBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Storage
pub use strata_index_core::{CompositeKey, KeyValueStore, StoreError, StoreResult};
pub use strata_index_storage::MemoryStore;
