//! User aggregate root.

use super::{EmailAddress, ProjectCounters, Role, UserId, UserName, UserProfile};
use crate::counter::domain::{CounterAdjustment, UserCounter, saturating_apply};
use crate::matching::Coordinates;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// User aggregate root.
///
/// Counters are part of the aggregate but are only ever mutated through
/// the counter aggregation service, via the store's atomic adjustment
/// primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    coordinates: Option<Coordinates>,
    profile: UserProfile,
    counters: ProjectCounters,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted display name.
    pub name: UserName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted location, if the user shared one.
    pub coordinates: Option<Coordinates>,
    /// Persisted role-fixing profile.
    pub profile: UserProfile,
    /// Persisted counter values.
    pub counters: ProjectCounters,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Registers a new user with zeroed counters.
    #[must_use]
    pub fn register(
        name: UserName,
        email: EmailAddress,
        profile: UserProfile,
        coordinates: Option<Coordinates>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            name,
            email,
            coordinates,
            profile,
            counters: ProjectCounters::zeroed(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            coordinates: data.coordinates,
            profile: data.profile,
            counters: data.counters,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the user's location, if shared.
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Returns the role-fixing profile.
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Returns the role fixed at registration.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }

    /// Returns the derived counters.
    #[must_use]
    pub const fn counters(&self) -> ProjectCounters {
        self.counters
    }

    /// Returns the value of a single counter field.
    #[must_use]
    pub const fn counter(&self, counter: UserCounter) -> u64 {
        self.counters.get(counter)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a signed delta to a counter field, clamping at zero.
    ///
    /// Reserved for store adapters, which must call it inside a single
    /// atomic section.
    pub(crate) fn adjust_counter(
        &mut self,
        counter: UserCounter,
        delta: i64,
    ) -> CounterAdjustment {
        let adjustment = saturating_apply(self.counters.get(counter), delta);
        self.counters.set(counter, adjustment.value());
        adjustment
    }
}
