//! Derived-counter aggregation for Giglocal.
//!
//! User and task records carry derived integer counters (interested
//! totals, applied-task totals, active-project totals) that summarise
//! related records. This context owns the vocabulary of counter fields,
//! the saturating delta arithmetic, the atomic counter-store ports, and
//! the [`CounterAggregator`] service that every state-changing operation
//! goes through. Counters are never edited directly by callers and are
//! never driven below zero: a decrement past zero clamps and is logged
//! as an inconsistency.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration service in [`services`]
//!
//! [`CounterAggregator`]: services::CounterAggregator

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
