//! Repository port for interest persistence and lookup.

use crate::interest::domain::Interest;
use crate::task::domain::TaskId;
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for interest repository operations.
pub type InterestRepositoryResult<T> = Result<T, InterestRepositoryError>;

/// Interest persistence contract.
///
/// `insert_unique` must enforce the per-(task, freelancer) uniqueness
/// constraint atomically — check and insert in one store operation —
/// so two concurrent submissions from the same freelancer cannot both
/// succeed. A retried submission after a timeout therefore lands as
/// [`InterestRepositoryError::Duplicate`] rather than a second record.
/// Implementations back every call with a bounded timeout and surface
/// transport failures as [`InterestRepositoryError::Unavailable`].
#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// Inserts an interest record, enforcing pair uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`InterestRepositoryError::Duplicate`] when the
    /// freelancer already has an interest record for the task.
    async fn insert_unique(&self, interest: &Interest) -> InterestRepositoryResult<()>;

    /// Finds the interest record for a (task, freelancer) pair.
    ///
    /// Returns `None` when the pair has no record.
    async fn find(
        &self,
        task_id: TaskId,
        freelancer_id: UserId,
    ) -> InterestRepositoryResult<Option<Interest>>;

    /// Returns the interest records for a task, newest first.
    async fn list_for_task(&self, task_id: TaskId) -> InterestRepositoryResult<Vec<Interest>>;

    /// Returns the interest records authored by a freelancer, newest
    /// first.
    async fn list_for_freelancer(
        &self,
        freelancer_id: UserId,
    ) -> InterestRepositoryResult<Vec<Interest>>;

    /// Removes every interest record referencing the task, returning
    /// the removed records so the caller can settle derived counters.
    async fn delete_for_task(&self, task_id: TaskId) -> InterestRepositoryResult<Vec<Interest>>;
}

/// Errors returned by interest repository implementations.
#[derive(Debug, Clone, Error)]
pub enum InterestRepositoryError {
    /// The freelancer already has an interest record for the task.
    #[error("freelancer {freelancer_id} already registered interest in task {task_id}")]
    Duplicate {
        /// The referenced task.
        task_id: TaskId,
        /// The freelancer who already holds a record.
        freelancer_id: UserId,
    },

    /// The store did not answer within its bounded timeout.
    #[error("interest store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InterestRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
