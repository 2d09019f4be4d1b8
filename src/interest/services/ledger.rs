//! Service layer for registering and listing interest.

use crate::counter::{
    domain::{TaskCounter, UserCounter},
    ports::{TaskCounterStore, UserCounterStore},
    services::{CounterAggregator, CounterError},
};
use crate::interest::{
    domain::Interest,
    ports::{InterestRepository, InterestRepositoryError},
};
use crate::task::{
    domain::{TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::domain::{Actor, Role, UserId};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for interest ledger operations.
#[derive(Debug, Error)]
pub enum InterestLedgerError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Interest repository operation failed.
    #[error(transparent)]
    Repository(#[from] InterestRepositoryError),

    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

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

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task is no longer open for interest.
    #[error("task {0} is no longer available")]
    TaskUnavailable(TaskId),

    /// The freelancer already registered interest in the task.
    #[error("freelancer {freelancer_id} already registered interest in task {task_id}")]
    AlreadyInterested {
        /// The referenced task.
        task_id: TaskId,
        /// The freelancer who already holds a record.
        freelancer_id: UserId,
    },
}

/// Result type for interest ledger service operations.
pub type InterestLedgerResult<T> = Result<T, InterestLedgerError>;

/// Interest ledger orchestration service.
///
/// Submission relies on the repository's atomic unique insert for the
/// per-(task, freelancer) constraint, then settles the task's
/// `interested_count` and the freelancer's `tasks_applied` through the
/// counter aggregator.
#[derive(Clone)]
pub struct InterestLedgerService<I, R, US, TS, C>
where
    I: InterestRepository,
    R: TaskRepository,
    US: UserCounterStore,
    TS: TaskCounterStore,
    C: Clock + Send + Sync,
{
    interests: Arc<I>,
    tasks: Arc<R>,
    counters: CounterAggregator<US, TS>,
    clock: Arc<C>,
}

impl<I, R, US, TS, C> InterestLedgerService<I, R, US, TS, C>
where
    I: InterestRepository,
    R: TaskRepository,
    US: UserCounterStore,
    TS: TaskCounterStore,
    C: Clock + Send + Sync,
{
    /// Creates a new interest ledger service.
    #[must_use]
    pub const fn new(
        interests: Arc<I>,
        tasks: Arc<R>,
        counters: CounterAggregator<US, TS>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            interests,
            tasks,
            counters,
            clock,
        }
    }

    /// Registers the acting freelancer's interest in an open discuss
    /// task.
    ///
    /// A duplicate submission — concurrent or retried after a timeout —
    /// lands on the repository's uniqueness constraint and reports
    /// [`InterestLedgerError::AlreadyInterested`] without touching any
    /// counter.
    ///
    /// # Errors
    ///
    /// Returns [`InterestLedgerError::RoleRequired`] unless the actor is
    /// a freelancer, [`InterestLedgerError::NotFound`] when the task
    /// does not exist, [`InterestLedgerError::Domain`] for instant
    /// tasks, [`InterestLedgerError::TaskUnavailable`] when the task is
    /// no longer open, or [`InterestLedgerError::AlreadyInterested`] on
    /// a duplicate.
    pub async fn submit(&self, task_id: TaskId, actor: &Actor) -> InterestLedgerResult<Interest> {
        if !actor.has_role(Role::Freelancer) {
            return Err(InterestLedgerError::RoleRequired {
                action: "registering interest",
                required: Role::Freelancer,
            });
        }

        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(InterestLedgerError::NotFound(task_id))?;
        task.ensure_interest_eligible()?;
        if task.status() != TaskStatus::Open {
            return Err(InterestLedgerError::TaskUnavailable(task_id));
        }

        let interest = Interest::record(task_id, task.title(), actor.id(), &*self.clock);
        self.interests
            .insert_unique(&interest)
            .await
            .map_err(|err| match err {
                InterestRepositoryError::Duplicate {
                    task_id: duplicate_task,
                    freelancer_id,
                } => InterestLedgerError::AlreadyInterested {
                    task_id: duplicate_task,
                    freelancer_id,
                },
                other => InterestLedgerError::Repository(other),
            })?;

        self.counters
            .apply_task_delta(task_id, TaskCounter::InterestedCount, 1)
            .await?;
        self.counters
            .apply_user_delta(actor.id(), UserCounter::TasksApplied, 1)
            .await?;
        Ok(interest)
    }

    /// Returns the interest records for a task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`InterestLedgerError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_interested(&self, task_id: TaskId) -> InterestLedgerResult<Vec<Interest>> {
        Ok(self.interests.list_for_task(task_id).await?)
    }

    /// Returns the interests a freelancer has registered, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`InterestLedgerError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_for_freelancer(
        &self,
        freelancer_id: UserId,
    ) -> InterestLedgerResult<Vec<Interest>> {
        Ok(self.interests.list_for_freelancer(freelancer_id).await?)
    }
}
