//! In-memory repository and counter store for user accounts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::counter::{
    domain::{CounterAdjustment, UserCounter},
    ports::{CounterStoreError, CounterStoreResult, UserCounterStore},
};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
///
/// Also implements [`UserCounterStore`]: counter adjustments mutate the
/// stored aggregate under a single write-lock section, which is the
/// in-memory equivalent of a store-side atomic increment.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.users.get(&id).cloned())
    }
}

#[async_trait]
impl UserCounterStore for InMemoryUserRepository {
    async fn adjust_user_counter(
        &self,
        id: UserId,
        counter: UserCounter,
        delta: i64,
    ) -> CounterStoreResult<CounterAdjustment> {
        let mut state = self
            .state
            .write()
            .map_err(|err| CounterStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let user = state
            .users
            .get_mut(&id)
            .ok_or(CounterStoreError::MissingUser(id))?;
        Ok(user.adjust_counter(counter, delta))
    }
}
