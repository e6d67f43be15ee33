//! Behavioural integration tests for [`InMemoryTaskRepository`].
//!
//! These tests exercise the in-memory repository in realistic higher-level
//! flows, verifying that it correctly implements the repository contract
//! when used to back the task listing and lifecycle services.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]
#![expect(
    clippy::shadow_unrelated,
    reason = "Test code reuses variable names for clarity in sequential assertions"
)]

use mockable::DefaultClock;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDetails, TaskQuery, TaskStatus, TaskTitle, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn task_named(title: &str, clock: &DefaultClock) -> Task {
    let title = TaskTitle::new(title).expect("valid title");
    Task::new(TaskDetails::new(title), clock)
}

/// Walks a task through store, update, transition, and delete, checking the
/// repository reflects each step.
#[test]
fn full_task_lifecycle_through_repository() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let clock = DefaultClock;

    let mut task = task_named("Draft proposal", &clock);
    rt.block_on(repo.store(&task)).expect("store");

    let fetched = rt
        .block_on(repo.find_by_id(task.id()))
        .expect("find by id")
        .expect("exists");
    assert_eq!(fetched, task);

    task.mark_in_progress(&clock);
    rt.block_on(repo.update(&task)).expect("update");

    let fetched = rt
        .block_on(repo.find_by_id(task.id()))
        .expect("find by id")
        .expect("exists");
    assert_eq!(fetched.status(), TaskStatus::InProgress);

    task.mark_completed(&clock);
    rt.block_on(repo.update(&task)).expect("update");

    let fetched = rt
        .block_on(repo.find_by_id(task.id()))
        .expect("find by id")
        .expect("exists");
    assert_eq!(fetched.status(), TaskStatus::Completed);
    assert!(fetched.completed_at().is_some());

    rt.block_on(repo.delete(task.id())).expect("delete");
    let gone = rt.block_on(repo.find_by_id(task.id())).expect("find by id");
    assert!(gone.is_none());
}

/// Tests duplicate and missing-row errors in realistic call patterns.
#[test]
fn contract_errors_for_duplicates_and_missing_rows() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let clock = DefaultClock;

    let task = task_named("Original", &clock);
    rt.block_on(repo.store(&task)).expect("first store");

    let result = rt.block_on(repo.store(&task));
    assert!(
        matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()),
        "should reject a duplicate task id"
    );

    let phantom = task_named("Never stored", &clock);
    let result = rt.block_on(repo.update(&phantom));
    assert!(
        matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == phantom.id()),
        "update should require an existing row"
    );

    let result = rt.block_on(repo.delete(phantom.id()));
    assert!(
        matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == phantom.id()),
        "delete should require an existing row"
    );
}

/// Tests that a cloned repository handle shares state with the original.
#[test]
fn cloned_repository_shares_state() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let repo_clone = repo.clone();
    let clock = DefaultClock;

    let task = task_named("Shared", &clock);
    rt.block_on(repo.store(&task)).expect("store via original");

    let mut updated = task.clone();
    updated.mark_in_progress(&clock);
    rt.block_on(repo_clone.update(&updated))
        .expect("update via clone");

    let from_original = rt
        .block_on(repo.find_by_id(task.id()))
        .expect("find via original")
        .expect("exists");
    assert_eq!(from_original.status(), TaskStatus::InProgress);
}

/// Tests that listing applies filters and the query's ordering together.
#[test]
fn listing_filters_and_orders_in_one_pass() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let clock = DefaultClock;

    for (title, status) in [
        ("Alpha", TaskStatus::Pending),
        ("Beta", TaskStatus::InProgress),
        ("Gamma", TaskStatus::Pending),
    ] {
        let mut task = task_named(title, &clock);
        task.apply_update(
            TaskUpdate {
                status: Some(status),
                ..TaskUpdate::default()
            },
            &clock,
        );
        rt.block_on(repo.store(&task)).expect("store");
    }

    let query = TaskQuery::new().with_status(TaskStatus::Pending);
    let pending = rt.block_on(repo.list(&query)).expect("list");

    assert_eq!(pending.len(), 2);
    // Equal priorities fall back to newest-first creation order.
    assert_eq!(pending[0].title().as_str(), "Gamma");
    assert_eq!(pending[1].title().as_str(), "Alpha");
}
