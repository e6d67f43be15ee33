//! Named, reusable read queries over the task collection.

use crate::task::{
    domain::{Task, TaskId, TaskQuery, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;

/// Result type for task selector operations.
pub type TaskSelectorResult<T> = Result<T, TaskRepositoryError>;

/// Aggregate counts over a task collection.
///
/// Every count, including `overdue`, is scoped to the same filtered
/// collection the statistics were requested over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    /// Number of tasks in the collection.
    pub total: usize,
    /// Tasks with pending status.
    pub pending: usize,
    /// Tasks with in-progress status.
    pub in_progress: usize,
    /// Tasks with completed status.
    pub completed: usize,
    /// Tasks with cancelled status.
    pub cancelled: usize,
    /// Tasks with a past due date and a status other than completed.
    pub overdue: usize,
}

/// Read-side selector service over the task collection.
pub struct TaskSelector<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskSelector<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskSelector<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task selector.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    pub async fn get(&self, id: TaskId) -> TaskSelectorResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id))
    }

    /// Lists tasks matching the query, in the query's ordering.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the listing fails.
    pub async fn list(&self, query: &TaskQuery) -> TaskSelectorResult<Vec<Task>> {
        self.repository.list(query).await
    }

    /// Lists tasks with pending status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the listing fails.
    pub async fn pending(&self) -> TaskSelectorResult<Vec<Task>> {
        self.list(&TaskQuery::new().with_status(TaskStatus::Pending))
            .await
    }

    /// Lists tasks with completed status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the listing fails.
    pub async fn completed(&self) -> TaskSelectorResult<Vec<Task>> {
        self.list(&TaskQuery::new().with_status(TaskStatus::Completed))
            .await
    }

    /// Lists tasks that are overdue now.
    ///
    /// A task is overdue when its due date is set and in the past and its
    /// status is anything other than completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the listing fails.
    pub async fn overdue(&self) -> TaskSelectorResult<Vec<Task>> {
        self.list(&TaskQuery::new().with_overdue_at(self.clock.utc()))
            .await
    }

    /// Computes aggregate counts over the collection selected by `query`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the listing fails.
    pub async fn statistics(&self, query: &TaskQuery) -> TaskSelectorResult<TaskStatistics> {
        let tasks = self.list(query).await?;
        let now = self.clock.utc();

        let mut stats = TaskStatistics {
            total: tasks.len(),
            ..TaskStatistics::default()
        };
        for task in &tasks {
            match task.status() {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Cancelled => stats.cancelled += 1,
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
        }
        Ok(stats)
    }
}
