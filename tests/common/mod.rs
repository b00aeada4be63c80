// tests/common/mod.rs
//! Shared test fixtures.

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
