//! Request handlers for the task REST surface.

use super::{
    AppState,
    dto::{CreateTaskBody, ListTasksParams, TaskResponse, UpdateTaskBody},
    error::ApiError,
};
use crate::task::{
    domain::{TaskId, TaskOrdering, TaskQuery, TaskStatus},
    services::{CreateTaskRequest, TaskStatistics, UpdateTaskRequest},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use uuid::Uuid;

/// Liveness probe.
pub(super) async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// `GET /tasks`: lists tasks with optional status, overdue, search, and
/// ordering parameters.
pub(super) async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let now = state.clock.utc();
    let query = build_query(&params, now)?;
    let tasks = state.selector.list(&query).await?;
    Ok(Json(to_responses(&tasks, now)))
}

/// `POST /tasks`: creates a task.
pub(super) async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let mut request = CreateTaskRequest::new(body.title);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(priority) = body.priority {
        request = request.with_priority(priority);
    }
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }

    let task = state.lifecycle.create(request).await?;
    let now = state.clock.utc();
    Ok((StatusCode::CREATED, Json(TaskResponse::from_task(&task, now))))
}

/// `GET /tasks/{id}`: retrieves a single task.
pub(super) async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.selector.get(TaskId::from_uuid(id)).await?;
    let now = state.clock.utc();
    Ok(Json(TaskResponse::from_task(&task, now)))
}

/// `PUT /tasks/{id}` and `PATCH /tasks/{id}`: applies a partial update.
pub(super) async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let mut request = UpdateTaskRequest::new();
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(priority) = body.priority {
        request = request.with_priority(priority);
    }
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }

    let task = state.lifecycle.update(TaskId::from_uuid(id), request).await?;
    let now = state.clock.utc();
    Ok(Json(TaskResponse::from_task(&task, now)))
}

/// `DELETE /tasks/{id}`: removes a task permanently.
pub(super) async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.lifecycle.delete(TaskId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /tasks/{id}/complete`: marks a task as completed.
pub(super) async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.lifecycle.complete(TaskId::from_uuid(id)).await?;
    let now = state.clock.utc();
    Ok(Json(TaskResponse::from_task(&task, now)))
}

/// `POST /tasks/{id}/start`: marks a task as in progress.
pub(super) async fn start_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.lifecycle.start(TaskId::from_uuid(id)).await?;
    let now = state.clock.utc();
    Ok(Json(TaskResponse::from_task(&task, now)))
}

/// `GET /tasks/pending`: lists tasks with pending status.
pub(super) async fn pending_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.selector.pending().await?;
    let now = state.clock.utc();
    Ok(Json(to_responses(&tasks, now)))
}

/// `GET /tasks/statistics`: aggregate counts over the filtered collection.
pub(super) async fn task_statistics(
    State(state): State<AppState>,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<TaskStatistics>, ApiError> {
    let now = state.clock.utc();
    let query = build_query(&params, now)?;
    let stats = state.selector.statistics(&query).await?;
    Ok(Json(stats))
}

/// Translates listing parameters into a task query.
///
/// An unknown `status` value is a validation error; an unrecognised
/// `ordering` expression falls back to the default ordering.
fn build_query(params: &ListTasksParams, now: DateTime<Utc>) -> Result<TaskQuery, ApiError> {
    let mut query = TaskQuery::new();
    if let Some(raw) = &params.status {
        let status = TaskStatus::try_from(raw.as_str())
            .map_err(|err| ApiError::Validation(err.to_string()))?;
        query = query.with_status(status);
    }
    if params
        .overdue
        .as_deref()
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    {
        query = query.with_overdue_at(now);
    }
    if let Some(term) = &params.search
        && !term.is_empty()
    {
        query = query.with_search(term.clone());
    }
    if let Some(raw) = &params.ordering
        && let Some(ordering) = TaskOrdering::parse(raw)
    {
        query = query.with_ordering(ordering);
    }
    Ok(query)
}

fn to_responses(tasks: &[crate::task::domain::Task], now: DateTime<Utc>) -> Vec<TaskResponse> {
    tasks
        .iter()
        .map(|task| TaskResponse::from_task(task, now))
        .collect()
}
