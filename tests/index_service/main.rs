//! IndexService Integration Tests
//!
//! Tests for the index facade: CRUD contract, lifecycle, properties.

#[path = "../common/mod.rs"]
mod common;

mod properties;
