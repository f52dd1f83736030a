//! Composite-key index service.
//!
//! [`IndexService`] maps a four-part key (namespace, namespace_a,
//! namespace_b, value_a) to a single string value (value_b) stored in an
//! injected [`KeyValueStore`].
//!
//! # Write semantics
//!
//! | Operation | Key absent | Key present |
//! |-----------|------------|-------------|
//! | `create` | writes | no-op, never overwrites |
//! | `update` | `Error::NotFound` | overwrites |
//! | `delete` | store decides | removes |
//!
//! Every operation touches exactly one key. Store failures other than
//! not-found are returned as [`Error::Storage`] and never retried.
//!
//! # Example
//!
//! ```ignore
//! use strata_index::prelude::*;
//!
//! let index = IndexService::in_memory();
//! index.boot();
//!
//! index.create("user", "email", "id", "alice@example.com", "42")?;
//! assert_eq!(index.search("user", "email", "id", "alice@example.com")?, "42");
//!
//! index.shutdown();
//! ```

use crate::error::{Error, Result};
use crate::lifecycle::{Once, ShutdownSignal};
use std::sync::Arc;
use std::time::Duration;
use strata_index_core::{contains_delimiter, storage_key, KeyValueStore, KEY_DELIMITER};
use strata_index_storage::MemoryStore;
use tracing::{debug, info, warn};

/// Index operations.
///
/// Implemented by [`IndexService`]. Depend on this trait when the concrete
/// service should be swappable (for example, with a test double).
pub trait Index: Send + Sync {
    /// One-shot initialization. Repeat calls are no-ops.
    fn boot(&self);

    /// One-shot teardown. Repeat calls are no-ops.
    fn shutdown(&self);

    /// Map the key to `value_b` unless a mapping already exists.
    fn create(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
        value_b: &str,
    ) -> Result<()>;

    /// Overwrite an existing mapping; fails with `NotFound` if there is none.
    fn update(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
        value_b: &str,
    ) -> Result<()>;

    /// Remove the mapping without checking that it exists.
    fn delete(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<()>;

    /// Whether a mapping exists.
    fn exists(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<bool>;

    /// Read the mapped value.
    fn search(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<String>;
}

/// Index facade over a key-value store.
///
/// Holds no entry state of its own: the store is authoritative for every
/// read. The store is shared, never released by the service; its lifecycle
/// belongs to whoever injected it.
///
/// Create a service with [`IndexService::builder`], [`IndexService::new`]
/// or [`IndexService::in_memory`].
pub struct IndexService {
    store: Arc<dyn KeyValueStore>,
    boot_once: Once,
    shutdown_once: Once,
    closer: ShutdownSignal,
}

impl IndexService {
    /// Create a service over an already constructed store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            boot_once: Once::new(),
            shutdown_once: Once::new(),
            closer: ShutdownSignal::new(),
        }
    }

    /// Create a service over a fresh [`MemoryStore`].
    ///
    /// Nothing is persisted; entries are lost when the last reference to
    /// the store is dropped.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Create a builder for service configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let index = IndexService::builder()
    ///     .store(MemoryStore::new())
    ///     .build()?;
    /// ```
    pub fn builder() -> IndexServiceBuilder {
        IndexServiceBuilder::new()
    }

    /// The injected store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Whether [`boot`](Self::boot) has completed
    pub fn is_booted(&self) -> bool {
        self.boot_once.has_run()
    }

    /// Whether [`shutdown`](Self::shutdown) has completed
    pub fn is_shutdown(&self) -> bool {
        self.closer.is_closed()
    }

    /// Block until the service is shut down.
    ///
    /// Returns immediately if it already is.
    pub fn wait_for_shutdown(&self) {
        self.closer.wait()
    }

    /// Block until the service is shut down or `timeout` elapses.
    ///
    /// Returns `true` if the service is shut down.
    pub fn wait_for_shutdown_timeout(&self, timeout: Duration) -> bool {
        self.closer.wait_timeout(timeout)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Initialize the service.
    ///
    /// Runs setup exactly once, even under concurrent calls. CRUD operations
    /// do not require a prior boot, but callers should boot before use so
    /// setup can be added here later.
    pub fn boot(&self) {
        self.boot_once.run_once(|| {
            info!("index service booted");
        });
    }

    /// Shut the service down.
    ///
    /// Closes the shutdown signal exactly once, releasing every
    /// [`wait_for_shutdown`](Self::wait_for_shutdown) caller. The store is
    /// left untouched.
    pub fn shutdown(&self) {
        self.shutdown_once.run_once(|| {
            self.closer.close();
            info!("index service shut down");
        });
    }

    // =========================================================================
    // Index operations
    // =========================================================================

    /// Map the key to `value_b` if no mapping exists yet.
    ///
    /// An existing mapping is left unchanged and the call still succeeds;
    /// use [`update`](Self::update) to overwrite.
    pub fn create(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
        value_b: &str,
    ) -> Result<()> {
        let key = self.key(namespace, namespace_a, namespace_b, value_a);

        if self.store.exists(&key)? {
            debug!(key = %key, "index entry exists, create skipped");
            return Ok(());
        }

        self.store.set(&key, value_b)?;
        debug!(key = %key, "index entry created");
        Ok(())
    }

    /// Overwrite an existing mapping.
    ///
    /// Returns [`Error::NotFound`] if there is no mapping; never creates one.
    pub fn update(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
        value_b: &str,
    ) -> Result<()> {
        let key = self.key(namespace, namespace_a, namespace_b, value_a);

        if !self.store.exists(&key)? {
            return Err(Error::NotFound { key });
        }

        self.store.set(&key, value_b)?;
        debug!(key = %key, "index entry updated");
        Ok(())
    }

    /// Remove the mapping.
    ///
    /// There is no existence check. Whether removing a missing mapping fails
    /// is up to the store; its error is returned as [`Error::Storage`]
    /// unchanged.
    pub fn delete(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<()> {
        let key = self.key(namespace, namespace_a, namespace_b, value_a);

        self.store.remove(&key)?;
        debug!(key = %key, "index entry deleted");
        Ok(())
    }

    /// Whether a mapping exists.
    ///
    /// Derived from [`search`](Self::search): not-found is `false`, any
    /// other error is returned.
    pub fn exists(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<bool> {
        match self.search(namespace, namespace_a, namespace_b, value_a) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Read the mapped value.
    ///
    /// The store's not-found signal becomes [`Error::NotFound`] carrying the
    /// composite storage key.
    pub fn search(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<String> {
        let key = self.key(namespace, namespace_a, namespace_b, value_a);

        match self.store.get(&key) {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => Err(Error::NotFound { key }),
            Err(e) => Err(e.into()),
        }
    }

    fn key(&self, namespace: &str, namespace_a: &str, namespace_b: &str, value_a: &str) -> String {
        let key = storage_key(namespace, namespace_a, namespace_b, value_a);
        if contains_delimiter(&[namespace, namespace_a, namespace_b, value_a]) {
            warn!(
                key = %key,
                delimiter = %KEY_DELIMITER,
                "key part contains the delimiter; storage key may collide with another index entry"
            );
        }
        key
    }
}

impl Index for IndexService {
    fn boot(&self) {
        IndexService::boot(self)
    }

    fn shutdown(&self) {
        IndexService::shutdown(self)
    }

    fn create(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
        value_b: &str,
    ) -> Result<()> {
        IndexService::create(self, namespace, namespace_a, namespace_b, value_a, value_b)
    }

    fn update(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
        value_b: &str,
    ) -> Result<()> {
        IndexService::update(self, namespace, namespace_a, namespace_b, value_a, value_b)
    }

    fn delete(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<()> {
        IndexService::delete(self, namespace, namespace_a, namespace_b, value_a)
    }

    fn exists(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<bool> {
        IndexService::exists(self, namespace, namespace_a, namespace_b, value_a)
    }

    fn search(
        &self,
        namespace: &str,
        namespace_a: &str,
        namespace_b: &str,
        value_a: &str,
    ) -> Result<String> {
        IndexService::search(self, namespace, namespace_a, namespace_b, value_a)
    }
}

impl std::fmt::Debug for IndexService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexService")
            .field("booted", &self.is_booted())
            .field("shutdown", &self.is_shutdown())
            .finish()
    }
}

/// Builder for [`IndexService`].
///
/// The store is the only setting and it is required.
///
/// # Example
///
/// ```ignore
/// let index = IndexService::builder()
///     .store(MemoryStore::new())
///     .build()?;
/// ```
#[derive(Default)]
pub struct IndexServiceBuilder {
    store: Option<Arc<dyn KeyValueStore>>,
}

impl IndexServiceBuilder {
    /// Create a builder with no store set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backing store.
    pub fn store<S: KeyValueStore + 'static>(mut self, store: S) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set a store that is shared with other owners.
    pub fn shared_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the service.
    ///
    /// Returns [`Error::Config`] if no store was set.
    pub fn build(self) -> Result<IndexService> {
        let store = self
            .store
            .ok_or_else(|| Error::Config("store must not be empty".to_string()))?;
        Ok(IndexService::new(store))
    }
}
