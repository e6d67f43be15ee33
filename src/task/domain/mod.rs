//! Domain model for task records and their status lifecycle.
//!
//! The task domain models creation, validated field writes, the permissive
//! status lifecycle, and the named query predicates, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod query;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{Priority, TaskId, TaskTitle};
pub use query::{OrderDirection, OrderField, TaskOrdering, TaskQuery};
pub use task::{PersistedTaskData, Task, TaskDetails, TaskStatus, TaskUpdate};
