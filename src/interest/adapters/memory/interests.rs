//! In-memory repository for interest records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::interest::{
    domain::Interest,
    ports::{InterestRepository, InterestRepositoryError, InterestRepositoryResult},
};
use crate::task::domain::TaskId;
use crate::user::domain::UserId;

/// Thread-safe in-memory interest repository.
///
/// The (task, freelancer) pair is the map key, so the uniqueness check
/// and the insert are one operation under the write lock — the
/// in-memory equivalent of a store-side uniqueness constraint.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInterestRepository {
    state: Arc<RwLock<InMemoryInterestState>>,
}

#[derive(Debug, Default)]
struct InMemoryInterestState {
    records: HashMap<(TaskId, UserId), Interest>,
}

impl InMemoryInterestRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> InterestRepositoryError {
    InterestRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Collects records matching `predicate`, newest first with an id
/// tiebreak for determinism.
fn collect_sorted(
    state: &InMemoryInterestState,
    predicate: impl Fn(&Interest) -> bool,
) -> Vec<Interest> {
    let mut records: Vec<Interest> = state
        .records
        .values()
        .filter(|interest| predicate(interest))
        .cloned()
        .collect();
    records.sort_by(|a, b| {
        b.interested_at()
            .cmp(&a.interested_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
    records
}

#[async_trait]
impl InterestRepository for InMemoryInterestRepository {
    async fn insert_unique(&self, interest: &Interest) -> InterestRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let key = (interest.task_id(), interest.freelancer_id());
        if state.records.contains_key(&key) {
            return Err(InterestRepositoryError::Duplicate {
                task_id: interest.task_id(),
                freelancer_id: interest.freelancer_id(),
            });
        }
        state.records.insert(key, interest.clone());
        Ok(())
    }

    async fn find(
        &self,
        task_id: TaskId,
        freelancer_id: UserId,
    ) -> InterestRepositoryResult<Option<Interest>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.records.get(&(task_id, freelancer_id)).cloned())
    }

    async fn list_for_task(&self, task_id: TaskId) -> InterestRepositoryResult<Vec<Interest>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(collect_sorted(&state, |interest| {
            interest.task_id() == task_id
        }))
    }

    async fn list_for_freelancer(
        &self,
        freelancer_id: UserId,
    ) -> InterestRepositoryResult<Vec<Interest>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(collect_sorted(&state, |interest| {
            interest.freelancer_id() == freelancer_id
        }))
    }

    async fn delete_for_task(&self, task_id: TaskId) -> InterestRepositoryResult<Vec<Interest>> {
        let mut state = self.state.write().map_err(poisoned)?;
        let keys: Vec<(TaskId, UserId)> = state
            .records
            .keys()
            .filter(|(record_task, _)| *record_task == task_id)
            .copied()
            .collect();
        let mut removed = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(interest) = state.records.remove(&key) {
                removed.push(interest);
            }
        }
        Ok(removed)
    }
}
