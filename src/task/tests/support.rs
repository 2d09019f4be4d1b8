//! Shared wiring for task service and concurrency tests.

use std::sync::Arc;

use crate::counter::{domain::UserCounter, services::CounterAggregator};
use crate::interest::{
    adapters::memory::InMemoryInterestRepository, services::InterestLedgerService,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService,
};
use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{
        Actor, ClientProfile, EmailAddress, FreelancerProfile, User, UserName, UserProfile,
    },
    ports::UserRepository,
};
use eyre::WrapErr;
use mockable::DefaultClock;

pub(super) type Lifecycle = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryInterestRepository,
    InMemoryUserRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

pub(super) type Ledger = InterestLedgerService<
    InMemoryInterestRepository,
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

/// Fully wired in-memory service stack.
pub(super) struct Harness {
    pub(super) users: Arc<InMemoryUserRepository>,
    pub(super) lifecycle: Arc<Lifecycle>,
    pub(super) ledger: Arc<Ledger>,
}

impl Harness {
    pub(super) fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let interests = Arc::new(InMemoryInterestRepository::new());
        let counters = CounterAggregator::new(Arc::clone(&users), Arc::clone(&tasks));
        let clock = Arc::new(DefaultClock);
        let lifecycle = TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&interests),
            counters.clone(),
            Arc::clone(&clock),
        );
        let ledger = InterestLedgerService::new(interests, tasks, counters, clock);
        Self {
            users,
            lifecycle: Arc::new(lifecycle),
            ledger: Arc::new(ledger),
        }
    }

    /// Registers a client account and returns its actor context.
    pub(super) async fn client(&self, email: &str) -> eyre::Result<Actor> {
        self.register("Meera Joshi", email, UserProfile::Client(ClientProfile::new()))
            .await
    }

    /// Registers a freelancer account and returns its actor context.
    pub(super) async fn freelancer(&self, email: &str) -> eyre::Result<Actor> {
        self.register(
            "Ravi Kumar",
            email,
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await
    }

    /// Reads a counter value back through the user repository.
    pub(super) async fn counter_of(
        &self,
        actor: &Actor,
        counter: UserCounter,
    ) -> eyre::Result<u64> {
        let user = self
            .users
            .find_by_id(actor.id())
            .await
            .wrap_err("counter lookup")?
            .ok_or_else(|| eyre::eyre!("user {} must exist", actor.id()))?;
        Ok(user.counter(counter))
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        profile: UserProfile,
    ) -> eyre::Result<Actor> {
        let user = User::register(
            UserName::new(name)?,
            EmailAddress::new(email)?,
            profile,
            None,
            &DefaultClock,
        );
        self.users.store(&user).await.wrap_err("store user")?;
        Ok(Actor::new(user.id(), user.role()))
    }
}
