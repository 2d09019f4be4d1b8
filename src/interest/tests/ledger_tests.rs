//! Service tests for interest submission and listing.

use std::sync::Arc;

use crate::counter::{domain::UserCounter, services::CounterAggregator};
use crate::interest::{
    adapters::memory::InMemoryInterestRepository,
    services::{InterestLedgerError, InterestLedgerService},
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskType},
    services::{PostTaskRequest, TaskLifecycleService},
};
use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{
        Actor, ClientProfile, EmailAddress, FreelancerProfile, Role, User, UserName, UserProfile,
    },
    ports::UserRepository,
};
use eyre::{WrapErr, ensure, eyre};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type Lifecycle = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryInterestRepository,
    InMemoryUserRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

type Ledger = InterestLedgerService<
    InMemoryInterestRepository,
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryTaskRepository,
    DefaultClock,
>;

struct Harness {
    users: Arc<InMemoryUserRepository>,
    lifecycle: Arc<Lifecycle>,
    ledger: Arc<Ledger>,
}

#[fixture]
fn harness() -> Harness {
    let users = Arc::new(InMemoryUserRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let interests = Arc::new(InMemoryInterestRepository::new());
    let counters = CounterAggregator::new(Arc::clone(&users), Arc::clone(&tasks));
    let clock = Arc::new(DefaultClock);
    let lifecycle = Arc::new(TaskLifecycleService::new(
        Arc::clone(&tasks),
        Arc::clone(&interests),
        counters.clone(),
        Arc::clone(&clock),
    ));
    let ledger = Arc::new(InterestLedgerService::new(
        interests, tasks, counters, clock,
    ));
    Harness {
        users,
        lifecycle,
        ledger,
    }
}

impl Harness {
    async fn register(&self, email: &str, profile: UserProfile) -> eyre::Result<Actor> {
        let user = User::register(
            UserName::new("Test Account")?,
            EmailAddress::new(email)?,
            profile,
            None,
            &DefaultClock,
        );
        self.users.store(&user).await.wrap_err("store user")?;
        Ok(Actor::new(user.id(), user.role()))
    }

    async fn discuss_task(&self, client: &Actor) -> eyre::Result<TaskId> {
        let request =
            PostTaskRequest::new("Catalogue a library", "₹4000", "Two weeks", TaskType::Discuss);
        let task = self
            .lifecycle
            .post(request, client)
            .await
            .wrap_err("post task")?;
        Ok(task.id())
    }

    async fn tasks_applied(&self, actor: &Actor) -> eyre::Result<u64> {
        let user = self
            .users
            .find_by_id(actor.id())
            .await
            .wrap_err("counter lookup")?
            .ok_or_else(|| eyre!("user {} must exist", actor.id()))?;
        Ok(user.counter(UserCounter::TasksApplied))
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submission_records_interest_and_settles_counters(harness: Harness) -> eyre::Result<()> {
    let client = harness
        .register("meera@example.test", UserProfile::Client(ClientProfile::new()))
        .await?;
    let freelancer = harness
        .register(
            "ravi@example.test",
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await?;
    let task_id = harness.discuss_task(&client).await?;

    let interest = harness.ledger.submit(task_id, &freelancer).await?;

    ensure!(interest.task_id() == task_id);
    ensure!(interest.freelancer_id() == freelancer.id());
    ensure!(interest.task_title() == "Catalogue a library");

    let task = harness
        .lifecycle
        .find(task_id)
        .await?
        .ok_or_else(|| eyre!("task must exist"))?;
    ensure!(task.interested_count() == 1);
    ensure!(harness.tasks_applied(&freelancer).await? == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_submission_is_rejected_without_counter_drift(
    harness: Harness,
) -> eyre::Result<()> {
    let client = harness
        .register("meera@example.test", UserProfile::Client(ClientProfile::new()))
        .await?;
    let freelancer = harness
        .register(
            "ravi@example.test",
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await?;
    let task_id = harness.discuss_task(&client).await?;
    harness.ledger.submit(task_id, &freelancer).await?;

    let result = harness.ledger.submit(task_id, &freelancer).await;

    ensure!(matches!(
        result,
        Err(InterestLedgerError::AlreadyInterested { task_id: duplicate, freelancer_id })
            if duplicate == task_id && freelancer_id == freelancer.id()
    ));

    let task = harness
        .lifecycle
        .find(task_id)
        .await?
        .ok_or_else(|| eyre!("task must exist"))?;
    ensure!(task.interested_count() == 1);
    ensure!(harness.tasks_applied(&freelancer).await? == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submission_requires_the_freelancer_role(harness: Harness) -> eyre::Result<()> {
    let client = harness
        .register("meera@example.test", UserProfile::Client(ClientProfile::new()))
        .await?;
    let task_id = harness.discuss_task(&client).await?;

    let result = harness.ledger.submit(task_id, &client).await;

    ensure!(matches!(
        result,
        Err(InterestLedgerError::RoleRequired {
            required: Role::Freelancer,
            ..
        })
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn instant_tasks_do_not_take_interest(harness: Harness) -> eyre::Result<()> {
    let client = harness
        .register("meera@example.test", UserProfile::Client(ClientProfile::new()))
        .await?;
    let freelancer = harness
        .register(
            "ravi@example.test",
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await?;
    let request = PostTaskRequest::new("Jump start a car", "₹300", "Now", TaskType::Instant);
    let task = harness.lifecycle.post(request, &client).await?;

    let result = harness.ledger.submit(task.id(), &freelancer).await;

    ensure!(matches!(
        result,
        Err(InterestLedgerError::Domain(
            TaskDomainError::DirectAcceptanceRequired(_)
        ))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_tasks_report_unavailable(harness: Harness) -> eyre::Result<()> {
    let client = harness
        .register("meera@example.test", UserProfile::Client(ClientProfile::new()))
        .await?;
    let freelancer = harness
        .register(
            "ravi@example.test",
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await?;
    let task_id = harness.discuss_task(&client).await?;
    harness.lifecycle.close(task_id, &client).await?;

    let result = harness.ledger.submit(task_id, &freelancer).await;

    ensure!(matches!(
        result,
        Err(InterestLedgerError::TaskUnavailable(id)) if id == task_id
    ));
    ensure!(harness.tasks_applied(&freelancer).await? == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_reports_not_found(harness: Harness) -> eyre::Result<()> {
    let freelancer = harness
        .register(
            "ravi@example.test",
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await?;

    let result = harness.ledger.submit(TaskId::new(), &freelancer).await;

    ensure!(matches!(result, Err(InterestLedgerError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_newest_first_on_both_axes(harness: Harness) -> eyre::Result<()> {
    let client = harness
        .register("meera@example.test", UserProfile::Client(ClientProfile::new()))
        .await?;
    let first = harness
        .register(
            "ravi@example.test",
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await?;
    let second = harness
        .register(
            "asha@example.test",
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await?;
    let task_a = harness.discuss_task(&client).await?;
    let task_b = harness.discuss_task(&client).await?;

    harness.ledger.submit(task_a, &first).await?;
    harness.ledger.submit(task_a, &second).await?;
    harness.ledger.submit(task_b, &first).await?;

    let for_task = harness.ledger.list_interested(task_a).await?;
    ensure!(for_task.len() == 2);
    ensure!(
        for_task[0].interested_at() >= for_task[1].interested_at(),
        "task listings order newest first"
    );

    let for_freelancer = harness.ledger.list_for_freelancer(first.id()).await?;
    ensure!(for_freelancer.len() == 2);
    ensure!(
        for_freelancer[0].interested_at() >= for_freelancer[1].interested_at(),
        "freelancer listings order newest first"
    );
    ensure!(
        for_freelancer
            .iter()
            .all(|interest| interest.freelancer_id() == first.id())
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_duplicate_submissions_land_exactly_once(
    harness: Harness,
) -> eyre::Result<()> {
    let client = harness
        .register("meera@example.test", UserProfile::Client(ClientProfile::new()))
        .await?;
    let freelancer = harness
        .register(
            "ravi@example.test",
            UserProfile::Freelancer(FreelancerProfile::new()),
        )
        .await?;
    let task_id = harness.discuss_task(&client).await?;

    let mut handles = Vec::with_capacity(8);
    for _ in 0..8 {
        let ledger = Arc::clone(&harness.ledger);
        handles.push(tokio::spawn(
            async move { ledger.submit(task_id, &freelancer).await },
        ));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => successes += 1,
            Err(InterestLedgerError::AlreadyInterested { .. }) => {}
            Err(other) => return Err(eyre!("unexpected failure: {other}")),
        }
    }
    ensure!(successes == 1, "exactly one submission may land");

    let task = harness
        .lifecycle
        .find(task_id)
        .await?
        .ok_or_else(|| eyre!("task must exist"))?;
    ensure!(task.interested_count() == 1);
    ensure!(harness.tasks_applied(&freelancer).await? == 1);
    Ok(())
}
