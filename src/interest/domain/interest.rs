//! The immutable interest record.

use crate::task::domain::TaskId;
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an interest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestId(Uuid);

impl InterestId {
    /// Creates a new random interest identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an interest identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for InterestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InterestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A freelancer's recorded intent to take on a discuss task.
///
/// Immutable once written; unique per (task, freelancer) pair. The
/// title is a snapshot taken at registration time so listings survive
/// later task edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    id: InterestId,
    task_id: TaskId,
    task_title: String,
    freelancer_id: UserId,
    interested_at: DateTime<Utc>,
}

impl Interest {
    /// Records a freelancer's interest in a task.
    #[must_use]
    pub fn record(
        task_id: TaskId,
        task_title: impl Into<String>,
        freelancer_id: UserId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: InterestId::new(),
            task_id,
            task_title: task_title.into(),
            freelancer_id,
            interested_at: clock.utc(),
        }
    }

    /// Returns the interest identifier.
    #[must_use]
    pub const fn id(&self) -> InterestId {
        self.id
    }

    /// Returns the referenced task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the task-title snapshot taken at registration.
    #[must_use]
    pub fn task_title(&self) -> &str {
        &self.task_title
    }

    /// Returns the interested freelancer.
    #[must_use]
    pub const fn freelancer_id(&self) -> UserId {
        self.freelancer_id
    }

    /// Returns when the interest was registered.
    #[must_use]
    pub const fn interested_at(&self) -> DateTime<Utc> {
        self.interested_at
    }
}
