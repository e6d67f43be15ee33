//! Error mapping from service errors onto HTTP responses.

use crate::task::{ports::TaskRepositoryError, services::TaskLifecycleError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Error surfaced by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request value failed validation.
    #[error("{0}")]
    Validation(String),

    /// The requested task does not exist.
    #[error("task not found")]
    NotFound,

    /// An internal failure occurred.
    #[error("internal server error")]
    Internal(#[source] TaskRepositoryError),
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(source) => {
                error!(error = %source, "repository failure while serving request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(domain) => Self::Validation(domain.to_string()),
            TaskLifecycleError::Repository(repository) => repository.into(),
        }
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other),
        }
    }
}
