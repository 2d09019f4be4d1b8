//! Domain model for user accounts.
//!
//! The user domain models registration with a role-fixing profile,
//! validated contact details, and the derived project counters, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod actor;
mod counters;
mod error;
mod ids;
mod name;
mod profile;
mod user;

pub use actor::Actor;
pub use counters::ProjectCounters;
pub use error::{ParseRoleError, UserDomainError};
pub use ids::UserId;
pub use name::{EmailAddress, UserName};
pub use profile::{ClientProfile, FreelancerProfile, Role, UserProfile};
pub use user::{PersistedUserData, User};
