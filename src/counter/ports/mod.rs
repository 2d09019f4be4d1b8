//! Port contracts for atomic counter storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the counter
//! aggregation service.

pub mod store;

pub use store::{CounterStoreError, CounterStoreResult, TaskCounterStore, UserCounterStore};
