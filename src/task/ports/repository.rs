//! Repository port for task persistence, lookup, and conditional
//! lifecycle writes.

use crate::task::domain::{Task, TaskId, TaskStatus};
use crate::user::domain::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Outcome of the conditional assignment write.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
    /// The task was still open; it is now assigned.
    Assigned(Task),
    /// The condition failed: the task had already left the open status.
    Unavailable,
}

/// Outcome of the conditional close write.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    /// The task was still active; it is now closed.
    Closed {
        /// The task after closing.
        task: Task,
        /// The status the task held before closing.
        previous_status: TaskStatus,
        /// The freelancer whose assignment was released, if any.
        released_assignee: Option<UserId>,
    },
    /// The condition failed: the task was already closed.
    AlreadyClosed,
}

/// Task persistence contract.
///
/// The conditional writes (`assign_if_open`, `close_if_active`) must
/// each execute as one atomic store operation — compare the current
/// status and apply the transition in the same step — so that exactly
/// one of any number of racing callers succeeds. Implementations back
/// every call with a bounded timeout and surface transport failures as
/// [`TaskRepositoryError::Unavailable`] instead of hanging.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks posted by the given client, newest first.
    async fn list_by_owner(&self, client_id: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks assigned to the given freelancer, newest first.
    async fn list_by_assignee(&self, freelancer_id: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks currently in the given status, newest first.
    async fn list_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Atomically assigns the task to `freelancer_id` if it is still
    /// open.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn assign_if_open(
        &self,
        id: TaskId,
        freelancer_id: UserId,
        now: DateTime<Utc>,
    ) -> TaskRepositoryResult<AssignmentOutcome>;

    /// Atomically closes the task if it is not already closed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn close_if_active(
        &self,
        id: TaskId,
        now: DateTime<Utc>,
    ) -> TaskRepositoryResult<CloseOutcome>;

    /// Removes the task, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store did not answer within its bounded timeout.
    #[error("task store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
