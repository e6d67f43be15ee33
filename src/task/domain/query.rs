//! Declarative query predicates and ordering over the task collection.
//!
//! A [`TaskQuery`] names the reusable filters the selectors compose (status
//! match, overdue cut-off, free-text search) together with a result
//! ordering. Adapters interpret the same query: the in-memory repository
//! evaluates [`TaskQuery::matches`] and [`TaskOrdering::compare`] directly,
//! while the `PostgreSQL` repository translates them to SQL with matching
//! semantics (including `NULL` due dates sorting last ascending and first
//! descending).

use super::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Field a task listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    /// Order by title.
    Title,
    /// Order by priority.
    Priority,
    /// Order by due date. Tasks without a due date sort as greatest.
    DueDate,
    /// Order by creation time.
    CreatedAt,
    /// Order by the canonical status string.
    Status,
}

impl OrderField {
    fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Title => a.title().as_str().cmp(b.title().as_str()),
            Self::Priority => a.priority().cmp(&b.priority()),
            Self::DueDate => compare_due_dates(a.due_date(), b.due_date()),
            Self::CreatedAt => a.created_at().cmp(&b.created_at()),
            Self::Status => a.status().as_str().cmp(b.status().as_str()),
        }
    }
}

/// Sort direction for an ordering field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Result ordering for task listings.
///
/// The default ordering is priority descending. Every ordering other than
/// one on the creation time breaks ties by creation time descending, so the
/// unfiltered default listing is priority descending then newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskOrdering {
    field: OrderField,
    direction: OrderDirection,
}

impl TaskOrdering {
    /// Creates an ordering over the given field and direction.
    #[must_use]
    pub const fn new(field: OrderField, direction: OrderDirection) -> Self {
        Self { field, direction }
    }

    /// Parses an ordering expression such as `priority` or `-due_date`.
    ///
    /// A leading `-` selects descending order. Returns `None` for
    /// unrecognised field names; callers fall back to the default ordering.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (name, direction) = trimmed.strip_prefix('-').map_or(
            (trimmed, OrderDirection::Ascending),
            |rest| (rest, OrderDirection::Descending),
        );
        let field = match name {
            "title" => OrderField::Title,
            "priority" => OrderField::Priority,
            "due_date" => OrderField::DueDate,
            "created_at" => OrderField::CreatedAt,
            "status" => OrderField::Status,
            _ => return None,
        };
        Some(Self { field, direction })
    }

    /// Returns the ordering field.
    #[must_use]
    pub const fn field(self) -> OrderField {
        self.field
    }

    /// Returns the ordering direction.
    #[must_use]
    pub const fn direction(self) -> OrderDirection {
        self.direction
    }

    /// Compares two tasks under this ordering.
    #[must_use]
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        let primary = match self.direction {
            OrderDirection::Ascending => self.field.compare(a, b),
            OrderDirection::Descending => self.field.compare(a, b).reverse(),
        };
        if primary != Ordering::Equal || self.field == OrderField::CreatedAt {
            return primary;
        }
        b.created_at().cmp(&a.created_at())
    }
}

impl Default for TaskOrdering {
    fn default() -> Self {
        Self::new(OrderField::Priority, OrderDirection::Descending)
    }
}

/// Compares optional due dates with missing values treated as greatest.
fn compare_due_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Composable filter and ordering over the task collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    status: Option<TaskStatus>,
    overdue_at: Option<DateTime<Utc>>,
    search: Option<String>,
    ordering: TaskOrdering,
}

impl TaskQuery {
    /// Creates an unfiltered query with the default ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to tasks overdue at the given instant.
    #[must_use]
    pub const fn with_overdue_at(mut self, now: DateTime<Utc>) -> Self {
        self.overdue_at = Some(now);
        self
    }

    /// Restricts results to tasks whose title or description contains the
    /// given term, case-insensitively.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub const fn with_ordering(mut self, ordering: TaskOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Returns the status filter, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the overdue cut-off instant, if any.
    #[must_use]
    pub const fn overdue_at(&self) -> Option<DateTime<Utc>> {
        self.overdue_at
    }

    /// Returns the search term, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the result ordering.
    #[must_use]
    pub const fn ordering(&self) -> TaskOrdering {
        self.ordering
    }

    /// Evaluates the filter predicates against a task.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| task.status() != status) {
            return false;
        }
        if self.overdue_at.is_some_and(|now| !task.is_overdue(now)) {
            return false;
        }
        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            let in_title = task.title().as_str().to_lowercase().contains(&needle);
            let in_description = task
                .description()
                .is_some_and(|text| text.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }
        true
    }
}
