//! Composite index keys
//!
//! This module defines [`CompositeKey`], the four-part logical identifier
//! of an index entry, and the single function that turns it into the
//! storage key handed to a [`KeyValueStore`](crate::KeyValueStore).

use serde::{Deserialize, Serialize};

/// Separator placed between the four parts of a storage key.
///
/// The separator is never escaped. A part that itself contains it can make
/// two different composite keys serialize to the same storage key; use
/// [`CompositeKey::contains_delimiter`] to detect that case.
pub const KEY_DELIMITER: char = ':';

/// Four-part logical key of an index entry
///
/// Parts are ordered: namespace → namespace_a → namespace_b → value_a.
/// Each part is an opaque string.
///
/// # Examples
///
/// ```
/// use strata_index_core::CompositeKey;
///
/// let key = CompositeKey::new("user", "email", "id", "alice@example.com");
/// assert_eq!(key.storage_key(), "user:email:id:alice@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompositeKey {
    namespace: String,
    namespace_a: String,
    namespace_b: String,
    value_a: String,
}

impl CompositeKey {
    /// Create a new composite key
    pub fn new(
        namespace: impl Into<String>,
        namespace_a: impl Into<String>,
        namespace_b: impl Into<String>,
        value_a: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            namespace_a: namespace_a.into(),
            namespace_b: namespace_b.into(),
            value_a: value_a.into(),
        }
    }

    /// Top-level namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Namespace of the indexed (source) value
    pub fn namespace_a(&self) -> &str {
        &self.namespace_a
    }

    /// Namespace of the mapped (target) value
    pub fn namespace_b(&self) -> &str {
        &self.namespace_b
    }

    /// The indexed value itself
    pub fn value_a(&self) -> &str {
        &self.value_a
    }

    /// Serialize to the storage key
    ///
    /// Same as [`crate::key::storage_key`] on the individual parts.
    pub fn storage_key(&self) -> String {
        storage_key(
            &self.namespace,
            &self.namespace_a,
            &self.namespace_b,
            &self.value_a,
        )
    }

    /// Returns true if any part contains [`KEY_DELIMITER`].
    ///
    /// Such keys may collide with another composite key after serialization.
    ///
    /// ```
    /// use strata_index_core::CompositeKey;
    ///
    /// assert!(!CompositeKey::new("a", "b", "c", "d").contains_delimiter());
    /// assert!(CompositeKey::new("a", "b", "c", "d:e").contains_delimiter());
    /// ```
    pub fn contains_delimiter(&self) -> bool {
        contains_delimiter(&[
            self.namespace.as_str(),
            self.namespace_a.as_str(),
            self.namespace_b.as_str(),
            self.value_a.as_str(),
        ])
    }

    /// Split a storage key back into its parts.
    ///
    /// Returns `None` unless the key splits into exactly four parts, so
    /// keys built from parts containing the delimiter do not parse.
    pub fn parse(storage_key: &str) -> Option<Self> {
        let mut parts = storage_key.split(KEY_DELIMITER);
        let key = Self::new(parts.next()?, parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        Some(key)
    }
}

impl std::fmt::Display for CompositeKey {
    /// Display the storage key: namespace:namespace_a:namespace_b:value_a
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.namespace,
            self.namespace_a,
            self.namespace_b,
            self.value_a,
            d = KEY_DELIMITER
        )
    }
}

/// Compose the storage key for four key parts.
///
/// This is the only place storage keys are built; every index operation
/// goes through it so the same parts always address the same entry.
pub fn storage_key(namespace: &str, namespace_a: &str, namespace_b: &str, value_a: &str) -> String {
    let mut key = String::with_capacity(
        namespace.len() + namespace_a.len() + namespace_b.len() + value_a.len() + 3,
    );
    key.push_str(namespace);
    key.push(KEY_DELIMITER);
    key.push_str(namespace_a);
    key.push(KEY_DELIMITER);
    key.push_str(namespace_b);
    key.push(KEY_DELIMITER);
    key.push_str(value_a);
    key
}

/// Returns true if any key part contains [`KEY_DELIMITER`].
pub fn contains_delimiter(parts: &[&str]) -> bool {
    parts.iter().any(|part| part.contains(KEY_DELIMITER))
}
