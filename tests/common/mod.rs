//! Shared test utilities for integration tests.

#![allow(dead_code)]

pub use std::sync::Arc;
pub use strata_index::prelude::*;
pub use strata_index::storage_key;

use std::sync::atomic::{AtomicU64, Ordering};

static KEY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Route `tracing` output to the test harness.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A value_a part that no other test uses
pub fn unique_value() -> String {
    format!("value_{}", KEY_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Service over a memory store the test can inspect directly
pub struct TestIndex {
    pub store: Arc<MemoryStore>,
    pub index: IndexService,
}

impl TestIndex {
    /// Booted service over a lenient memory store
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Booted service over a memory store whose remove fails on missing keys
    pub fn strict() -> Self {
        Self::with_store(MemoryStore::strict())
    }

    fn with_store(store: MemoryStore) -> Self {
        init_tracing();
        let store = Arc::new(store);
        let index = IndexService::builder()
            .shared_store(store.clone())
            .build()
            .expect("store is set");
        index.boot();
        Self { store, index }
    }
}
