//! User accounts for Giglocal.
//!
//! Models the two fixed actor roles (client and freelancer), the
//! role-specific profiles chosen at registration, the derived project
//! counters zeroed at signup, and the explicit [`Actor`] context that
//! identity resolution threads into every state-changing operation.
//! Role is fixed by the profile variant picked at account creation and
//! is never inferred from transient signals. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! [`Actor`]: domain::Actor

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
