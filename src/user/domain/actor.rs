//! Explicit actor context threaded into core operations.

use super::{Role, UserId};
use serde::{Deserialize, Serialize};

/// The authenticated actor on whose behalf an operation runs.
///
/// Resolved by the external identity provider before any state-changing
/// call and passed explicitly; the core never consults ambient or
/// global session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: UserId,
    role: Role,
}

impl Actor {
    /// Creates an actor context from resolved identity and role.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns the actor's user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the actor's fixed role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether the actor holds the given role.
    #[must_use]
    pub const fn has_role(&self, role: Role) -> bool {
        matches!(
            (self.role, role),
            (Role::Client, Role::Client) | (Role::Freelancer, Role::Freelancer)
        )
    }
}
