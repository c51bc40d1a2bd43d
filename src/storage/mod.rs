//! Storage implementations for different backends
//!
//! The REST backend lives in [`crate::client`]; this module holds the
//! in-memory backend used in development and tests.

pub mod in_memory;

pub use in_memory::{InMemoryDataService, StaticResource};
