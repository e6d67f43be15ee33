//! Application services for task commands and queries.

mod lifecycle;
mod selectors;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    UpdateTaskRequest,
};
pub use selectors::{TaskSelector, TaskSelectorResult, TaskStatistics};
