//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Display title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Task status.
    pub status: String,
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
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Display title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Task status.
    pub status: String,
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
}

/// Full-row update model mirroring the aggregate state.
///
/// `treat_none_as_null` keeps nullable columns faithful to the aggregate
/// instead of skipping unset fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Display title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Task status.
    pub status: String,
    /// Task priority.
    pub priority: i32,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
