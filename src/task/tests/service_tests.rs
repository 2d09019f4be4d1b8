//! Service tests for the task lifecycle over the in-memory stores.

use super::support::Harness;
use crate::counter::domain::UserCounter;
use crate::task::{
    domain::{TaskDomainError, TaskId, TaskStatus, TaskType},
    services::{PostTaskRequest, TaskLifecycleError},
};
use crate::user::domain::Role;
use eyre::{ensure, eyre};
use rstest::{fixture, rstest};

#[fixture]
fn harness() -> Harness {
    Harness::new()
}

fn instant_request() -> PostTaskRequest {
    PostTaskRequest::new("Assemble a wardrobe", "₹900", "Tomorrow", TaskType::Instant)
        .with_location("Indiranagar, Bengaluru")
}

fn discuss_request() -> PostTaskRequest {
    PostTaskRequest::new("Build a portfolio site", "₹15000", "Three weeks", TaskType::Discuss)
        .with_description("Static site, five pages")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_requires_the_client_role(harness: Harness) -> eyre::Result<()> {
    let freelancer = harness.freelancer("ravi@example.test").await?;

    let result = harness.lifecycle.post(instant_request(), &freelancer).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::RoleRequired {
            required: Role::Client,
            ..
        })
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_rejects_a_blank_title(harness: Harness) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let request = PostTaskRequest::new("   ", "₹900", "Tomorrow", TaskType::Instant);

    let result = harness.lifecycle.post(request, &client).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn posted_task_is_open_and_listed_for_its_owner(harness: Harness) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;

    let task = harness.lifecycle.post(instant_request(), &client).await?;

    ensure!(task.status() == TaskStatus::Open);
    ensure!(task.client_id() == client.id());

    let open = harness.lifecycle.list_by_status(TaskStatus::Open).await?;
    ensure!(open.iter().any(|candidate| candidate.id() == task.id()));

    let owned = harness.lifecycle.list_by_owner(client.id()).await?;
    ensure!(owned.len() == 1);
    ensure!(owned[0].id() == task.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_assigns_and_increments_both_active_projects(
    harness: Harness,
) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let freelancer = harness.freelancer("ravi@example.test").await?;
    let task = harness.lifecycle.post(instant_request(), &client).await?;

    let accepted = harness.lifecycle.accept(task.id(), &freelancer).await?;

    ensure!(accepted.status() == TaskStatus::Assigned);
    ensure!(accepted.assigned_to() == Some(freelancer.id()));
    ensure!(
        harness
            .counter_of(&freelancer, UserCounter::ActiveProjects)
            .await?
            == 1
    );
    ensure!(
        harness
            .counter_of(&client, UserCounter::ActiveProjects)
            .await?
            == 1
    );

    let assigned = harness.lifecycle.list_by_assignee(freelancer.id()).await?;
    ensure!(assigned.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_rejects_discuss_tasks(harness: Harness) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let freelancer = harness.freelancer("ravi@example.test").await?;
    let task = harness.lifecycle.post(discuss_request(), &client).await?;

    let result = harness.lifecycle.accept(task.id(), &freelancer).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InterestSelectionRequired(_)
        ))
    ));
    ensure!(
        harness
            .counter_of(&freelancer, UserCounter::ActiveProjects)
            .await?
            == 0
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_requires_the_freelancer_role(harness: Harness) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let task = harness.lifecycle.post(instant_request(), &client).await?;

    let result = harness.lifecycle.accept(task.id(), &client).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::RoleRequired {
            required: Role::Freelancer,
            ..
        })
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_of_a_missing_task_reports_not_found(harness: Harness) -> eyre::Result<()> {
    let freelancer = harness.freelancer("ravi@example.test").await?;

    let result = harness.lifecycle.accept(TaskId::new(), &freelancer).await;

    ensure!(matches!(result, Err(TaskLifecycleError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn late_acceptance_reports_unavailable_without_side_effects(
    harness: Harness,
) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let winner = harness.freelancer("ravi@example.test").await?;
    let latecomer = harness.freelancer("asha@example.test").await?;
    let task = harness.lifecycle.post(instant_request(), &client).await?;

    harness.lifecycle.accept(task.id(), &winner).await?;
    let result = harness.lifecycle.accept(task.id(), &latecomer).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::TaskUnavailable(id)) if id == task.id()
    ));
    ensure!(
        harness
            .counter_of(&latecomer, UserCounter::ActiveProjects)
            .await?
            == 0
    );

    let stored = harness
        .lifecycle
        .find(task.id())
        .await?
        .ok_or_else(|| eyre!("task must exist"))?;
    ensure!(stored.assigned_to() == Some(winner.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_selects_an_interested_freelancer(harness: Harness) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let freelancer = harness.freelancer("ravi@example.test").await?;
    let task = harness.lifecycle.post(discuss_request(), &client).await?;

    harness.ledger.submit(task.id(), &freelancer).await?;
    let assigned = harness
        .lifecycle
        .assign(task.id(), freelancer.id(), &client)
        .await?;

    ensure!(assigned.status() == TaskStatus::Assigned);
    ensure!(assigned.assigned_to() == Some(freelancer.id()));
    ensure!(assigned.interested_count() == 1);
    ensure!(
        harness
            .counter_of(&freelancer, UserCounter::ActiveProjects)
            .await?
            == 1
    );
    ensure!(
        harness
            .counter_of(&freelancer, UserCounter::TasksApplied)
            .await?
            == 1
    );
    ensure!(
        harness
            .counter_of(&client, UserCounter::ActiveProjects)
            .await?
            == 1
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_is_restricted_to_the_owning_client(harness: Harness) -> eyre::Result<()> {
    let owner = harness.client("meera@example.test").await?;
    let other = harness.client("vikram@example.test").await?;
    let freelancer = harness.freelancer("ravi@example.test").await?;
    let task = harness.lifecycle.post(discuss_request(), &owner).await?;

    let result = harness
        .lifecycle
        .assign(task.id(), freelancer.id(), &other)
        .await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::NotTaskOwner { task_id }) if task_id == task.id()
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closing_an_assigned_task_settles_both_parties(harness: Harness) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let freelancer = harness.freelancer("ravi@example.test").await?;
    let task = harness.lifecycle.post(instant_request(), &client).await?;
    harness.lifecycle.accept(task.id(), &freelancer).await?;

    let closed = harness.lifecycle.close(task.id(), &client).await?;

    ensure!(closed.status() == TaskStatus::Closed);
    ensure!(closed.assigned_to().is_none());
    ensure!(
        harness
            .counter_of(&freelancer, UserCounter::ActiveProjects)
            .await?
            == 0
    );
    ensure!(
        harness
            .counter_of(&freelancer, UserCounter::CompletedProjects)
            .await?
            == 1
    );
    ensure!(
        harness
            .counter_of(&client, UserCounter::ActiveProjects)
            .await?
            == 0
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closing_an_open_task_cancels_without_counter_effects(
    harness: Harness,
) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let task = harness.lifecycle.post(instant_request(), &client).await?;

    let closed = harness.lifecycle.close(task.id(), &client).await?;

    ensure!(closed.status() == TaskStatus::Closed);
    ensure!(
        harness
            .counter_of(&client, UserCounter::ActiveProjects)
            .await?
            == 0
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closing_twice_reports_unavailable(harness: Harness) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let task = harness.lifecycle.post(instant_request(), &client).await?;
    harness.lifecycle.close(task.id(), &client).await?;

    let result = harness.lifecycle.close(task.id(), &client).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::TaskUnavailable(id)) if id == task.id()
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_cascades_over_interest_records(harness: Harness) -> eyre::Result<()> {
    let client = harness.client("meera@example.test").await?;
    let first = harness.freelancer("ravi@example.test").await?;
    let second = harness.freelancer("asha@example.test").await?;
    let task = harness.lifecycle.post(discuss_request(), &client).await?;
    harness.ledger.submit(task.id(), &first).await?;
    harness.ledger.submit(task.id(), &second).await?;

    harness.lifecycle.delete(task.id(), &client).await?;

    ensure!(harness.lifecycle.find(task.id()).await?.is_none());
    ensure!(harness.ledger.list_interested(task.id()).await?.is_empty());
    ensure!(
        harness
            .counter_of(&first, UserCounter::TasksApplied)
            .await?
            == 0
    );
    ensure!(
        harness
            .counter_of(&second, UserCounter::TasksApplied)
            .await?
            == 0
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_is_restricted_to_the_owning_client(harness: Harness) -> eyre::Result<()> {
    let owner = harness.client("meera@example.test").await?;
    let other = harness.client("vikram@example.test").await?;
    let task = harness.lifecycle.post(instant_request(), &owner).await?;

    let result = harness.lifecycle.delete(task.id(), &other).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::NotTaskOwner { task_id }) if task_id == task.id()
    ));
    ensure!(harness.lifecycle.find(task.id()).await?.is_some());
    Ok(())
}
