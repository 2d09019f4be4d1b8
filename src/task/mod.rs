//! Task lifecycle management for Giglocal.
//!
//! A client posts a task in the `open` state; freelancers either accept
//! it directly (instant tasks) or register interest (discuss tasks);
//! the owning client assigns, closes, or deletes it. Every transition
//! that can be raced — acceptance, assignment, closing — executes as a
//! single conditional write in the repository, so exactly one competing
//! actor can win. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
