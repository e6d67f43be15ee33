//! REST surface for the task collection.
//!
//! The router delegates all behaviour to the task services; handlers only
//! translate between HTTP shapes and service requests.

mod dto;
mod error;
mod handlers;

pub use dto::{CreateTaskBody, ListTasksParams, TaskResponse, UpdateTaskBody};
pub use error::ApiError;

use crate::task::{
    ports::TaskRepository,
    services::{TaskLifecycleService, TaskSelector},
};
use axum::{
    Router,
    routing::{get, post},
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub(crate) lifecycle: TaskLifecycleService<dyn TaskRepository, DefaultClock>,
    pub(crate) selector: TaskSelector<dyn TaskRepository, DefaultClock>,
    pub(crate) clock: Arc<DefaultClock>,
}

impl AppState {
    /// Creates handler state over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            lifecycle: TaskLifecycleService::new(Arc::clone(&repository), Arc::clone(&clock)),
            selector: TaskSelector::new(repository, Arc::clone(&clock)),
            clock,
        }
    }
}

/// Builds the task API router.
///
/// Routes:
///
/// - `GET /health`
/// - `GET|POST /tasks`
/// - `GET /tasks/pending`, `GET /tasks/statistics`
/// - `GET|PUT|PATCH|DELETE /tasks/{id}`
/// - `POST /tasks/{id}/complete`, `POST /tasks/{id}/start`
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/tasks/pending", get(handlers::pending_tasks))
        .route("/tasks/statistics", get(handlers::task_statistics))
        .route(
            "/tasks/{id}",
            get(handlers::get_task)
                .put(handlers::update_task)
                .patch(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/tasks/{id}/complete", post(handlers::complete_task))
        .route("/tasks/{id}/start", post(handlers::start_task))
        .with_state(state)
}
