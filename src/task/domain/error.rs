//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The budget text is empty after trimming.
    #[error("task budget must not be empty")]
    EmptyBudget,

    /// The timeframe text is empty after trimming.
    #[error("task timeframe must not be empty")]
    EmptyTimeframe,

    /// The requested status transition is not legal.
    #[error("task {task_id} cannot transition from {from} to {to}")]
    InvalidStateTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// Direct acceptance was attempted on a discuss task.
    #[error("task {0} uses interest-based selection; register interest instead of accepting")]
    InterestSelectionRequired(TaskId),

    /// Interest registration was attempted on an instant task.
    #[error("task {0} is first-come-first-served; accept it directly instead")]
    DirectAcceptanceRequired(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task type: {0}")]
pub struct ParseTaskTypeError(pub String);
