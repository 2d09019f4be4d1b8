//! Interest ledger for Giglocal.
//!
//! Records a freelancer's intent to take on a discuss-type task. At
//! most one interest record may exist per (task, freelancer) pair; the
//! uniqueness check and the insert execute as one atomic repository
//! operation so concurrent submissions cannot both land. "Not
//! interested" feedback is a UI-local affordance and has no
//! representation here. The module follows hexagonal architecture:
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
