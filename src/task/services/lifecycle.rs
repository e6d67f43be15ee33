//! Service layer for task creation and status mutation.

use crate::task::{
    domain::{
        Priority, Task, TaskDetails, TaskDomainError, TaskId, TaskStatus, TaskTitle, TaskUpdate,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: i32,
    due_date: Option<DateTime<Utc>>,
    status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::MIN,
            due_date: None,
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial status, overriding the pending default.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for a partial task update.
///
/// Unset fields remain unchanged on the task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    priority: Option<i32>,
    due_date: Option<DateTime<Utc>>,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the task title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the task status without transition validation.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Owns every write path: creation, partial updates, the two status
/// transition operations, and deletion.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
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

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title or priority is
    /// invalid, in which case nothing is persisted, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let priority = Priority::new(request.priority)?;
        let details = TaskDetails {
            title,
            description: request.description,
            status: request.status.unwrap_or_default(),
            priority,
            due_date: request.due_date,
        };
        let task = Task::new(details, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a replacement field fails
    /// validation (the task is left unchanged) or
    /// [`TaskLifecycleError::Repository`] when the task does not exist or
    /// persistence fails.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let update = TaskUpdate {
            title: request.title.map(TaskTitle::new).transpose()?,
            description: request.description,
            status: request.status,
            priority: request.priority.map(Priority::new).transpose()?,
            due_date: request.due_date,
        };
        let mut task = self.fetch(id).await?;
        task.apply_update(update, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Marks a task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist or persistence fails.
    pub async fn complete(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.fetch(id).await?;
        task.mark_completed(&*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Marks a task as in progress.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist or persistence fails.
    pub async fn start(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.fetch(id).await?;
        task.mark_in_progress(&*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist or persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    async fn fetch(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id))?;
        Ok(task)
    }
}
