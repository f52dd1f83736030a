//! Core types for strata-index
//!
//! This crate defines the pieces shared by the index facade and its
//! storage backends:
//! - [`CompositeKey`]: four-part logical key and its storage encoding
//! - [`KeyValueStore`]: the backend contract
//! - [`StoreError`]: backend failures, including the not-found signal

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use key::{contains_delimiter, storage_key, CompositeKey, KEY_DELIMITER};
pub use traits::KeyValueStore;
