//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title cannot exceed {limit} characters, got {length}")]
    TitleTooLong {
        /// Maximum accepted title length.
        limit: usize,
        /// Length of the rejected title.
        length: usize,
    },

    /// The priority is below the accepted range.
    #[error("priority must be positive, got {0}")]
    NegativePriority(i32),

    /// The priority is above the accepted range.
    #[error("priority cannot exceed {limit}, got {value}")]
    PriorityTooHigh {
        /// Maximum accepted priority.
        limit: i32,
        /// The rejected value.
        value: i32,
    },
}

/// Error returned while parsing task statuses from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
