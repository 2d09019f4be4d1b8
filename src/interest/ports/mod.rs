//! Port contracts for the interest ledger.
//!
//! Ports define infrastructure-agnostic interfaces used by ledger
//! services.

pub mod repository;

pub use repository::{InterestRepository, InterestRepositoryError, InterestRepositoryResult};
