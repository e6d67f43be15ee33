//! Task aggregate root and status lifecycle types.

use super::{ParseTaskStatusError, Priority, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task status.
///
/// The status machine is deliberately permissive: the update path may write
/// any status from any other status, and only [`Task::mark_completed`] and
/// [`Task::mark_in_progress`] carry side effects beyond the status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Completed,
    /// Task has been abandoned without completion.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Validated field values for constructing a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    /// Display title.
    pub title: TaskTitle,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
    /// Validated priority.
    pub priority: Priority,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDetails {
    /// Creates details with the required title and defaults elsewhere.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            status: TaskStatus::default(),
            priority: Priority::default(),
            due_date: None,
        }
    }
}

/// Partial update applied to an existing task.
///
/// Fields left as `None` remain unchanged. Writing
/// [`TaskStatus::Completed`] through an update neither sets nor clears
/// `completed_at`; only [`Task::mark_completed`] manages that timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status, written without transition validation.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from validated details.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: details.title,
            description: details.description,
            status: details.status,
            priority: details.priority,
            due_date: details.due_date,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the completion timestamp, if any.
    ///
    /// The timestamp records the most recent [`Self::mark_completed`] call
    /// and is retained when the status later moves away from
    /// [`TaskStatus::Completed`].
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Marks the task as in progress.
    ///
    /// Callable from any status, including idempotently from
    /// [`TaskStatus::InProgress`].
    pub fn mark_in_progress(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::InProgress;
        self.touch(clock);
    }

    /// Marks the task as completed and records the completion time.
    ///
    /// Callable from any status. Repeated calls keep the status at
    /// [`TaskStatus::Completed`] and reset `completed_at` to the current
    /// clock time on each invocation. The clock is read once so
    /// `completed_at` and `updated_at` carry the same instant.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.status = TaskStatus::Completed;
        self.completed_at = Some(now);
        self.updated_at = now;
    }

    /// Applies a partial update to the task fields.
    ///
    /// Status writes bypass `completed_at` handling entirely, so a task
    /// updated away from [`TaskStatus::Completed`] keeps its stale
    /// completion timestamp.
    pub fn apply_update(&mut self, update: TaskUpdate, clock: &impl Clock) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        self.touch(clock);
    }

    /// Reports whether the task is overdue at the given instant.
    ///
    /// A task is overdue when it has a due date in the past and is not
    /// completed. Cancelled and in-progress tasks with past due dates are
    /// overdue; tasks without a due date never are.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date
            .is_some_and(|due| due < now && self.status != TaskStatus::Completed)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
