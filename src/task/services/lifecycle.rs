//! Service layer for posting, accepting, assigning, closing, and
//! deleting tasks.

use crate::counter::{
    domain::UserCounter,
    ports::{TaskCounterStore, UserCounterStore},
    services::{CounterAggregator, CounterError},
};
use crate::interest::ports::{InterestRepository, InterestRepositoryError};
use crate::matching::Coordinates;
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskStatus, TaskType},
    ports::{AssignmentOutcome, CloseOutcome, TaskRepository, TaskRepositoryError},
};
use crate::user::domain::{Actor, Role, UserId};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for posting a task.
#[derive(Debug, Clone, PartialEq)]
pub struct PostTaskRequest {
    title: String,
    description: String,
    location: String,
    coordinates: Option<Coordinates>,
    budget: String,
    timeframe: String,
    task_type: TaskType,
}

impl PostTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        budget: impl Into<String>,
        timeframe: impl Into<String>,
        task_type: TaskType,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            location: String::new(),
            coordinates: None,
            budget: budget.into(),
            timeframe: timeframe.into(),
            task_type,
        }
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the human-readable location text.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the structured coordinates.
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Interest repository operation failed during a cascade.
    #[error(transparent)]
    Interests(#[from] InterestRepositoryError),

    /// Counter aggregation failed.
    #[error(transparent)]
    Counter(#[from] CounterError),

    /// The actor does not hold the role the operation requires.
    #[error("{action} requires the {required} role")]
    RoleRequired {
        /// The rejected operation.
        action: &'static str,
        /// The role the operation requires.
        required: Role,
    },

    /// The actor is not the task's owning client.
    #[error("task {task_id} belongs to another client")]
    NotTaskOwner {
        /// The task whose ownership check failed.
        task_id: TaskId,
    },

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task left the open status before the operation landed —
    /// another actor won the race, or the task was closed or deleted.
    #[error("task {0} is no longer available")]
    TaskUnavailable(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every state-changing operation takes the explicit [`Actor`] resolved
/// by the identity provider and settles derived counters through the
/// counter aggregator as part of the same call.
#[derive(Clone)]
pub struct TaskLifecycleService<R, I, US, TS, C>
where
    R: TaskRepository,
    I: InterestRepository,
    US: UserCounterStore,
    TS: TaskCounterStore,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    interests: Arc<I>,
    counters: CounterAggregator<US, TS>,
    clock: Arc<C>,
}

impl<R, I, US, TS, C> TaskLifecycleService<R, I, US, TS, C>
where
    R: TaskRepository,
    I: InterestRepository,
    US: UserCounterStore,
    TS: TaskCounterStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        tasks: Arc<R>,
        interests: Arc<I>,
        counters: CounterAggregator<US, TS>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            interests,
            counters,
            clock,
        }
    }

    /// Posts a new task in the open status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::RoleRequired`] unless the actor is
    /// a client, [`TaskLifecycleError::Domain`] when draft validation
    /// fails, or [`TaskLifecycleError::Repository`] when persistence
    /// fails.
    pub async fn post(
        &self,
        request: PostTaskRequest,
        actor: &Actor,
    ) -> TaskLifecycleResult<Task> {
        require_role(actor, Role::Client, "posting a task")?;

        let PostTaskRequest {
            title,
            description,
            location,
            coordinates,
            budget,
            timeframe,
            task_type,
        } = request;
        let mut draft = TaskDraft::new(title, budget, timeframe, task_type)?
            .with_description(description)
            .with_location(location);
        if let Some(coords) = coordinates {
            draft = draft.with_coordinates(coords);
        }

        let task = Task::post(draft, actor.id(), &*self.clock);
        self.tasks.store(&task).await?;
        Ok(task)
    }

    /// Accepts an open instant task, first come first served.
    ///
    /// The assignment is a single conditional write: of any number of
    /// racing freelancers exactly one succeeds and the rest observe
    /// [`TaskLifecycleError::TaskUnavailable`] with no side effects. On
    /// success both parties' `active_projects` counters increment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::RoleRequired`] unless the actor is
    /// a freelancer, [`TaskLifecycleError::NotFound`] when the task does
    /// not exist, [`TaskLifecycleError::Domain`] for discuss tasks, or
    /// [`TaskLifecycleError::TaskUnavailable`] when the race is lost.
    pub async fn accept(&self, task_id: TaskId, actor: &Actor) -> TaskLifecycleResult<Task> {
        require_role(actor, Role::Freelancer, "accepting a task")?;

        let task = self.find_or_error(task_id).await?;
        task.ensure_directly_acceptable()?;

        self.assign_and_settle(task_id, actor.id()).await
    }

    /// Assigns an open task to a chosen freelancer.
    ///
    /// The owning client's selection step for discuss tasks. Subject to
    /// the same conditional write and counter effects as
    /// [`TaskLifecycleService::accept`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::RoleRequired`] unless the actor is
    /// a client, [`TaskLifecycleError::NotTaskOwner`] when the actor
    /// does not own the task, [`TaskLifecycleError::NotFound`] when the
    /// task does not exist, or [`TaskLifecycleError::TaskUnavailable`]
    /// when the task already left the open status.
    pub async fn assign(
        &self,
        task_id: TaskId,
        freelancer_id: UserId,
        actor: &Actor,
    ) -> TaskLifecycleResult<Task> {
        require_role(actor, Role::Client, "assigning a task")?;

        let task = self.find_or_error(task_id).await?;
        ensure_owner(&task, actor)?;

        self.assign_and_settle(task_id, freelancer_id).await
    }

    /// Closes an open or assigned task.
    ///
    /// Closing an assigned task releases the assignment (so the
    /// status/assignee invariant holds), decrements both parties'
    /// `active_projects`, and credits the freelancer's
    /// `completed_projects`. Closing an open task is a cancellation
    /// with no counter effects.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::RoleRequired`] unless the actor is
    /// a client, [`TaskLifecycleError::NotTaskOwner`] when the actor
    /// does not own the task, [`TaskLifecycleError::NotFound`] when the
    /// task does not exist, or [`TaskLifecycleError::TaskUnavailable`]
    /// when the task is already closed.
    pub async fn close(&self, task_id: TaskId, actor: &Actor) -> TaskLifecycleResult<Task> {
        require_role(actor, Role::Client, "closing a task")?;

        let task = self.find_or_error(task_id).await?;
        ensure_owner(&task, actor)?;

        match self.tasks.close_if_active(task_id, self.clock.utc()).await? {
            CloseOutcome::Closed {
                task: closed,
                released_assignee,
                ..
            } => {
                if let Some(freelancer_id) = released_assignee {
                    self.counters
                        .apply_user_delta(freelancer_id, UserCounter::ActiveProjects, -1)
                        .await?;
                    self.counters
                        .apply_user_delta(freelancer_id, UserCounter::CompletedProjects, 1)
                        .await?;
                    self.counters
                        .apply_user_delta(closed.client_id(), UserCounter::ActiveProjects, -1)
                        .await?;
                }
                Ok(closed)
            }
            CloseOutcome::AlreadyClosed => Err(TaskLifecycleError::TaskUnavailable(task_id)),
        }
    }

    /// Deletes a task and cascades over its interest records.
    ///
    /// The task is removed first so a concurrent interest submission
    /// observes a missing task instead of re-creating a record
    /// mid-cascade; each removed interest then decrements its author's
    /// `tasks_applied`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::RoleRequired`] unless the actor is
    /// a client, [`TaskLifecycleError::NotTaskOwner`] when the actor
    /// does not own the task, or [`TaskLifecycleError::NotFound`] when
    /// the task does not exist.
    pub async fn delete(&self, task_id: TaskId, actor: &Actor) -> TaskLifecycleResult<Task> {
        require_role(actor, Role::Client, "deleting a task")?;

        let task = self.find_or_error(task_id).await?;
        ensure_owner(&task, actor)?;

        let removed = self.tasks.delete(task_id).await?;
        let interests = self.interests.delete_for_task(task_id).await?;
        for interest in interests {
            self.counters
                .apply_user_delta(interest.freelancer_id(), UserCounter::TasksApplied, -1)
                .await?;
        }
        Ok(removed)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn find(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.tasks.find_by_id(task_id).await?)
    }

    /// Returns the tasks posted by a client, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_by_owner(&self, client_id: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list_by_owner(client_id).await?)
    }

    /// Returns the tasks assigned to a freelancer, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_by_assignee(
        &self,
        freelancer_id: UserId,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list_by_assignee(freelancer_id).await?)
    }

    /// Returns the tasks in a given status, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_by_status(&self, status: TaskStatus) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list_by_status(status).await?)
    }

    /// Runs the conditional assignment and settles both parties'
    /// `active_projects` counters.
    async fn assign_and_settle(
        &self,
        task_id: TaskId,
        freelancer_id: UserId,
    ) -> TaskLifecycleResult<Task> {
        let outcome = self
            .tasks
            .assign_if_open(task_id, freelancer_id, self.clock.utc())
            .await
            .map_err(|err| match err {
                // Deleted between the read and the conditional write.
                TaskRepositoryError::NotFound(id) => TaskLifecycleError::TaskUnavailable(id),
                other => TaskLifecycleError::Repository(other),
            })?;

        match outcome {
            AssignmentOutcome::Assigned(assigned) => {
                self.counters
                    .apply_user_delta(freelancer_id, UserCounter::ActiveProjects, 1)
                    .await?;
                self.counters
                    .apply_user_delta(assigned.client_id(), UserCounter::ActiveProjects, 1)
                    .await?;
                Ok(assigned)
            }
            AssignmentOutcome::Unavailable => Err(TaskLifecycleError::TaskUnavailable(task_id)),
        }
    }

    async fn find_or_error(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }
}

/// Rejects actors that do not hold the required role.
const fn require_role(
    actor: &Actor,
    required: Role,
    action: &'static str,
) -> Result<(), TaskLifecycleError> {
    if actor.has_role(required) {
        Ok(())
    } else {
        Err(TaskLifecycleError::RoleRequired { action, required })
    }
}

/// Rejects clients operating on tasks they do not own.
fn ensure_owner(task: &Task, actor: &Actor) -> Result<(), TaskLifecycleError> {
    if task.client_id() == actor.id() {
        Ok(())
    } else {
        Err(TaskLifecycleError::NotTaskOwner { task_id: task.id() })
    }
}
