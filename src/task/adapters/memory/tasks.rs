//! In-memory repository and counter store for tasks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::counter::{
    domain::{CounterAdjustment, TaskCounter},
    ports::{CounterStoreError, CounterStoreResult, TaskCounterStore},
};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{
        AssignmentOutcome, CloseOutcome, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
    },
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task repository.
///
/// The conditional writes and counter adjustments each run under a
/// single write-lock section, which is the in-memory equivalent of the
/// store's conditional-update and atomic-increment primitives.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Collects tasks matching `predicate`, newest first with an id
/// tiebreak for determinism.
fn collect_sorted(
    state: &InMemoryTaskState,
    predicate: impl Fn(&Task) -> bool,
) -> Vec<Task> {
    let mut tasks: Vec<Task> = state
        .tasks
        .values()
        .filter(|task| predicate(task))
        .cloned()
        .collect();
    tasks.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
    tasks
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_owner(&self, client_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(collect_sorted(&state, |task| task.client_id() == client_id))
    }

    async fn list_by_assignee(&self, freelancer_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(collect_sorted(&state, |task| {
            task.assigned_to() == Some(freelancer_id)
        }))
    }

    async fn list_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(collect_sorted(&state, |task| task.status() == status))
    }

    async fn assign_if_open(
        &self,
        id: TaskId,
        freelancer_id: UserId,
        now: DateTime<Utc>,
    ) -> TaskRepositoryResult<AssignmentOutcome> {
        let mut state = self.state.write().map_err(poisoned)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        // The domain state machine is the compare half of the swap.
        match task.assign_to(freelancer_id, now) {
            Ok(()) => Ok(AssignmentOutcome::Assigned(task.clone())),
            Err(_) => Ok(AssignmentOutcome::Unavailable),
        }
    }

    async fn close_if_active(
        &self,
        id: TaskId,
        now: DateTime<Utc>,
    ) -> TaskRepositoryResult<CloseOutcome> {
        let mut state = self.state.write().map_err(poisoned)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        let previous_status = task.status();
        match task.close(now) {
            Ok(released_assignee) => Ok(CloseOutcome::Closed {
                task: task.clone(),
                previous_status,
                released_assignee,
            }),
            Err(_) => Ok(CloseOutcome::AlreadyClosed),
        }
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}

#[async_trait]
impl TaskCounterStore for InMemoryTaskRepository {
    async fn adjust_task_counter(
        &self,
        id: TaskId,
        counter: TaskCounter,
        delta: i64,
    ) -> CounterStoreResult<CounterAdjustment> {
        let mut state = self
            .state
            .write()
            .map_err(|err| CounterStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(CounterStoreError::MissingTask(id))?;
        let TaskCounter::InterestedCount = counter;
        Ok(task.adjust_interested_count(delta))
    }
}
