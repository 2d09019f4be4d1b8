//! Counter aggregation over the atomic counter-store ports.

use crate::counter::{
    domain::{CounterAdjustment, TaskCounter, UserCounter},
    ports::{CounterStoreError, TaskCounterStore, UserCounterStore},
};
use crate::task::domain::TaskId;
use crate::user::domain::UserId;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Service-level errors for counter aggregation.
#[derive(Debug, Error)]
pub enum CounterError {
    /// Counter store operation failed.
    #[error(transparent)]
    Store(#[from] CounterStoreError),
}

/// Result type for counter aggregation operations.
pub type CounterResult<T> = Result<T, CounterError>;

/// Applies signed deltas to derived counters on user and task records.
///
/// This is the only component permitted to mutate counters. It delegates
/// to the store's atomic adjustment primitives and records a warning
/// whenever a decrement clamps at zero, since a clamp means a derived
/// counter had drifted from the records it summarises.
#[derive(Clone)]
pub struct CounterAggregator<U, T>
where
    U: UserCounterStore,
    T: TaskCounterStore,
{
    users: Arc<U>,
    tasks: Arc<T>,
}

impl<U, T> CounterAggregator<U, T>
where
    U: UserCounterStore,
    T: TaskCounterStore,
{
    /// Creates a counter aggregator over the given stores.
    #[must_use]
    pub const fn new(users: Arc<U>, tasks: Arc<T>) -> Self {
        Self { users, tasks }
    }

    /// Applies a signed delta to a counter field on a user record.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::Store`] when the user is missing or the
    /// store fails.
    pub async fn apply_user_delta(
        &self,
        id: UserId,
        counter: UserCounter,
        delta: i64,
    ) -> CounterResult<CounterAdjustment> {
        let adjustment = self.users.adjust_user_counter(id, counter, delta).await?;
        if adjustment.clamped() {
            warn!(
                user_id = %id,
                counter = counter.as_str(),
                delta,
                previous = adjustment.previous(),
                "user counter adjustment clamped; stored value had drifted"
            );
        }
        Ok(adjustment)
    }

    /// Applies a signed delta to a counter field on a task record.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::Store`] when the task is missing or the
    /// store fails.
    pub async fn apply_task_delta(
        &self,
        id: TaskId,
        counter: TaskCounter,
        delta: i64,
    ) -> CounterResult<CounterAdjustment> {
        let adjustment = self.tasks.adjust_task_counter(id, counter, delta).await?;
        if adjustment.clamped() {
            warn!(
                task_id = %id,
                counter = counter.as_str(),
                delta,
                previous = adjustment.previous(),
                "task counter adjustment clamped; stored value had drifted"
            );
        }
        Ok(adjustment)
    }
}
