//! Task aggregate root.

use super::{TaskDomainError, TaskDraft, TaskId, TaskStatus, TaskType};
use crate::counter::domain::{CounterAdjustment, saturating_apply};
use crate::matching::Coordinates;
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Upholds two invariants: `assigned_to` is `Some` exactly while the
/// status is [`TaskStatus::Assigned`], and `interested_count` tracks the
/// number of live interest records (maintained through the counter
/// aggregation service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    client_id: UserId,
    title: String,
    description: String,
    location: String,
    coordinates: Option<Coordinates>,
    budget: String,
    timeframe: String,
    task_type: TaskType,
    status: TaskStatus,
    assigned_to: Option<UserId>,
    interested_count: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning client.
    pub client_id: UserId,
    /// Persisted validated draft fields.
    pub draft: TaskDraft,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Persisted interest total.
    pub interested_count: u64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Posts a new task from a validated draft, in the open status.
    #[must_use]
    pub fn post(draft: TaskDraft, client_id: UserId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            client_id,
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            location: draft.location().to_owned(),
            coordinates: draft.coordinates(),
            budget: draft.budget().to_owned(),
            timeframe: draft.timeframe().to_owned(),
            task_type: draft.task_type(),
            status: TaskStatus::Open,
            assigned_to: None,
            interested_count: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            client_id: data.client_id,
            title: data.draft.title().to_owned(),
            description: data.draft.description().to_owned(),
            location: data.draft.location().to_owned(),
            coordinates: data.draft.coordinates(),
            budget: data.draft.budget().to_owned(),
            timeframe: data.draft.timeframe().to_owned(),
            task_type: data.draft.task_type(),
            status: data.status,
            assigned_to: data.assigned_to,
            interested_count: data.interested_count,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning client.
    #[must_use]
    pub const fn client_id(&self) -> UserId {
        self.client_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the human-readable location text.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the structured coordinates, if supplied.
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Returns the budget text.
    #[must_use]
    pub fn budget(&self) -> &str {
        &self.budget
    }

    /// Returns the timeframe text.
    #[must_use]
    pub fn timeframe(&self) -> &str {
        &self.timeframe
    }

    /// Returns the engagement type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assigned freelancer while the task is assigned.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the derived interest total.
    #[must_use]
    pub const fn interested_count(&self) -> u64 {
        self.interested_count
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Checks that the task admits direct acceptance.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InterestSelectionRequired`] for
    /// discuss tasks, which must go through the interest ledger.
    pub const fn ensure_directly_acceptable(&self) -> Result<(), TaskDomainError> {
        match self.task_type {
            TaskType::Instant => Ok(()),
            TaskType::Discuss => Err(TaskDomainError::InterestSelectionRequired(self.id)),
        }
    }

    /// Checks that the task admits interest registration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DirectAcceptanceRequired`] for instant
    /// tasks, which are first-come-first-served.
    pub const fn ensure_interest_eligible(&self) -> Result<(), TaskDomainError> {
        match self.task_type {
            TaskType::Discuss => Ok(()),
            TaskType::Instant => Err(TaskDomainError::DirectAcceptanceRequired(self.id)),
        }
    }

    /// Assigns the task to a freelancer.
    ///
    /// Callers that race on the same task must invoke this inside the
    /// store's single conditional-write section; the caller supplies the
    /// already-sampled timestamp for the same reason.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless the
    /// task is currently open.
    pub fn assign_to(
        &mut self,
        freelancer_id: UserId,
        now: DateTime<Utc>,
    ) -> Result<(), TaskDomainError> {
        self.check_transition(TaskStatus::Assigned)?;
        self.status = TaskStatus::Assigned;
        self.assigned_to = Some(freelancer_id);
        self.updated_at = now;
        Ok(())
    }

    /// Closes the task, releasing any assignment.
    ///
    /// Returns the freelancer who held the assignment, if any, so the
    /// caller can settle their counters. Subject to the same atomic
    /// section rule as [`Task::assign_to`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the task
    /// is already closed.
    pub fn close(&mut self, now: DateTime<Utc>) -> Result<Option<UserId>, TaskDomainError> {
        self.check_transition(TaskStatus::Closed)?;
        self.status = TaskStatus::Closed;
        self.updated_at = now;
        Ok(self.assigned_to.take())
    }

    /// Applies a signed delta to the interest total, clamping at zero.
    ///
    /// Reserved for store adapters, which must call it inside a single
    /// atomic section.
    pub(crate) fn adjust_interested_count(&mut self, delta: i64) -> CounterAdjustment {
        let adjustment = saturating_apply(self.interested_count, delta);
        self.interested_count = adjustment.value();
        adjustment
    }

    /// Rejects illegal transitions out of the current status.
    const fn check_transition(&self, to: TaskStatus) -> Result<(), TaskDomainError> {
        if self.status.can_transition_to(to) {
            Ok(())
        } else {
            Err(TaskDomainError::InvalidStateTransition {
                task_id: self.id,
                from: self.status,
                to,
            })
        }
    }
}
