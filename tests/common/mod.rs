//! Shared helpers for integration tests.

pub mod fake_source;
pub mod fixtures;
