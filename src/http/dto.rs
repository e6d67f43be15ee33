//! Request and response bodies for the task REST surface.

use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serialized task representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Task status.
    pub status: TaskStatus,
    /// Task priority.
    pub priority: i32,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Whether the task is overdue at serialization time. Read-only.
    pub is_overdue: bool,
}

impl TaskResponse {
    /// Builds a response from a task, computing `is_overdue` at `now`.
    #[must_use]
    pub fn from_task(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status(),
            priority: task.priority().value(),
            due_date: task.due_date(),
            completed_at: task.completed_at(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            is_overdue: task.is_overdue(now),
        }
    }
}

/// Body for `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Required display title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional priority; defaults to zero.
    #[serde(default)]
    pub priority: Option<i32>,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Optional initial status; defaults to pending.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Body for `PUT /tasks/{id}` and `PATCH /tasks/{id}`.
///
/// Fields left out remain unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement priority.
    #[serde(default)]
    pub priority: Option<i32>,
    /// Replacement due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Query parameters for `GET /tasks` and `GET /tasks/statistics`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksParams {
    /// Exact-match status filter.
    #[serde(default)]
    pub status: Option<String>,
    /// When `true` (case-insensitive), restrict to overdue tasks.
    #[serde(default)]
    pub overdue: Option<String>,
    /// Case-insensitive substring search over title and description.
    #[serde(default)]
    pub search: Option<String>,
    /// Ordering expression, e.g. `priority` or `-due_date`.
    #[serde(default)]
    pub ordering: Option<String>,
}
