//! Storage backends for strata-index
//!
//! This crate implements [`KeyValueStore`](strata_index_core::KeyValueStore)
//! backends:
//! - MemoryStore: DashMap-based in-memory storage

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryStore;
