//! Atomic counter-store ports for user and task records.

use crate::counter::domain::{CounterAdjustment, TaskCounter, UserCounter};
use crate::task::domain::TaskId;
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for counter store operations.
pub type CounterStoreResult<T> = Result<T, CounterStoreError>;

/// Atomic counter adjustment on user records.
///
/// Implementations must apply the delta as a single store-side
/// operation (`field = field + delta`, clamped at zero), never as a
/// read-then-write round-trip pair; two concurrent adjustments to the
/// same field must both take effect.
#[async_trait]
pub trait UserCounterStore: Send + Sync {
    /// Applies a signed delta to a counter field on a user record.
    ///
    /// # Errors
    ///
    /// Returns [`CounterStoreError::MissingUser`] when the user does not
    /// exist, or a transport variant on store failure.
    async fn adjust_user_counter(
        &self,
        id: UserId,
        counter: UserCounter,
        delta: i64,
    ) -> CounterStoreResult<CounterAdjustment>;
}

/// Atomic counter adjustment on task records.
///
/// Carries the same atomicity contract as [`UserCounterStore`].
#[async_trait]
pub trait TaskCounterStore: Send + Sync {
    /// Applies a signed delta to a counter field on a task record.
    ///
    /// # Errors
    ///
    /// Returns [`CounterStoreError::MissingTask`] when the task does not
    /// exist, or a transport variant on store failure.
    async fn adjust_task_counter(
        &self,
        id: TaskId,
        counter: TaskCounter,
        delta: i64,
    ) -> CounterStoreResult<CounterAdjustment>;
}

/// Errors returned by counter store implementations.
#[derive(Debug, Clone, Error)]
pub enum CounterStoreError {
    /// The referenced user record does not exist.
    #[error("user not found: {0}")]
    MissingUser(UserId),

    /// The referenced task record does not exist.
    #[error("task not found: {0}")]
    MissingTask(TaskId),

    /// The store did not answer within its bounded timeout.
    #[error("counter store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CounterStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
