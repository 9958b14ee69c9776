//! Task HTTP handlers
//!
//! This module contains HTTP handlers for task operations, including the
//! filtered/paginated listing endpoint. All handlers are thin wrappers
//! around repository calls, focusing only on HTTP concerns like
//! request/response mapping.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, RepositoryError};
use crate::models::{PageInfo, Task, TaskCreateRequest, TaskUpdateRequest};
use crate::web::{
    extractors::{RequestContext, TaskListParams},
    responses::{bad_request, created, handle_error, no_content, not_found},
    utils::{log_request, parse_due_date_param},
    AppState,
};

/// Request DTO for creating a task; also used by the update endpoint,
/// which replaces every field
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TaskPayload {
    pub user_id: i64,
    pub title: String,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Defaults to 3 on create; keeps the stored value on update
    pub priority: Option<i32>,
    /// Defaults to "To Do" on create; keeps the stored value on update
    pub status: Option<String>,
}

impl TaskPayload {
    pub fn into_create_request(self) -> TaskCreateRequest {
        TaskCreateRequest {
            user_id: self.user_id,
            title: self.title,
            subject: self.subject,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
        }
    }

    pub fn into_update_request(self) -> TaskUpdateRequest {
        TaskUpdateRequest {
            user_id: self.user_id,
            title: self.title,
            subject: self.subject,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
        }
    }
}

/// Response DTO for a task
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub priority: i32,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            user_id: task.user_id,
            title: task.title,
            subject: task.subject,
            description: task.description,
            due_date: task.due_date,
            priority: task.priority,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Echo of the filter values exactly as they arrived on the request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilterEcho {
    pub subject: String,
    pub priority: String,
    pub status: String,
}

/// Response body of the task listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskListResponse {
    pub data: Vec<TaskResponse>,
    pub pagination: PageInfo,
    pub filters: FilterEcho,
}

/// List tasks with filtering and pagination
#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    tag = "tasks",
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip", example = 0),
        ("limit" = Option<u64>, Query, description = "Maximum records per page", example = 10),
        ("subject" = Option<String>, Query, description = "Case-insensitive substring match on subject"),
        ("priority" = Option<String>, Query, description = "Exact priority match; non-numeric values are ignored"),
        ("status" = Option<String>, Query, description = "Case-insensitive substring match on status"),
    ),
    responses(
        (status = 200, description = "One page of tasks with pagination metadata", body = TaskListResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    context: RequestContext,
    params: TaskListParams,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/api/v1/tasks".parse().unwrap(),
        &context,
    );

    let query = crate::database::repositories::TaskListQuery {
        skip: params.skip,
        limit: params.limit,
        subject: params.subject.clone(),
        priority: params.priority.clone(),
        status: params.status.clone(),
    };

    match state.tasks.list(&query).await {
        Ok(page) => {
            let response = TaskListResponse {
                data: page.tasks.into_iter().map(TaskResponse::from).collect(),
                pagination: page.info,
                filters: FilterEcho {
                    subject: params.subject,
                    priority: params.priority,
                    status: params.status,
                },
            };
            Json(response).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list tasks: {}", e);
            handle_error(AppError::from(e)).into_response()
        }
    }
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    tag = "tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task created successfully", body = TaskResponse),
        (status = 500, description = "Internal server error (e.g. unknown owner)"),
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    context: RequestContext,
    Json(payload): Json<TaskPayload>,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::POST,
        &"/api/v1/tasks".parse().unwrap(),
        &context,
    );

    match state.tasks.create(payload.into_create_request()).await {
        Ok(task) => created(TaskResponse::from(task)).into_response(),
        Err(e) => {
            tracing::error!("Failed to create task: {}", e);
            handle_error(AppError::from(e)).into_response()
        }
    }
}

/// Get a specific task by ID
#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID", example = 1),
    ),
    responses(
        (status = 200, description = "Task details", body = TaskResponse),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &format!("/api/v1/tasks/{id}").parse().unwrap(),
        &context,
    );

    match state.tasks.find_by_id(id).await {
        Ok(Some(task)) => Json(TaskResponse::from(task)).into_response(),
        Ok(None) => not_found("task", &id.to_string()).into_response(),
        Err(e) => {
            tracing::error!("Failed to get task {}: {}", id, e);
            handle_error(AppError::from(e)).into_response()
        }
    }
}

/// List tasks due on a given calendar day
#[utoipa::path(
    get,
    path = "/api/v1/tasks/due_date/{due_date}",
    tag = "tasks",
    params(
        ("due_date" = String, Path, description = "Calendar day (YYYY-MM-DD) or timestamp; the time part is ignored", example = "2026-08-06"),
    ),
    responses(
        (status = 200, description = "Tasks due that day", body = [TaskResponse]),
        (status = 400, description = "Unparsable due date"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_tasks_by_due_date(
    State(state): State<AppState>,
    Path(due_date): Path<String>,
    context: RequestContext,
) -> impl IntoResponse {
    // The raw parameter may not be valid URI text, so log the static route
    log_request(
        &axum::http::Method::GET,
        &"/api/v1/tasks/due_date".parse().unwrap(),
        &context,
    );

    let day = match parse_due_date_param(&due_date) {
        Ok(day) => day,
        Err(error) => return bad_request(&error).into_response(),
    };

    match state.tasks.find_by_due_day(day).await {
        Ok(tasks) => {
            let response: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
            Json(response).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list tasks due on {}: {}", day, e);
            handle_error(AppError::from(e)).into_response()
        }
    }
}

/// Update an existing task
#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID", example = 1),
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Updated task", body = TaskResponse),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    context: RequestContext,
    Json(payload): Json<TaskPayload>,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::PUT,
        &format!("/api/v1/tasks/{id}").parse().unwrap(),
        &context,
    );

    match state.tasks.update(id, payload.into_update_request()).await {
        Ok(task) => Json(TaskResponse::from(task)).into_response(),
        Err(e) => {
            if !matches!(e, RepositoryError::RecordNotFound { .. }) {
                tracing::error!("Failed to update task {}: {}", id, e);
            }
            handle_error(AppError::from(e)).into_response()
        }
    }
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID", example = 1),
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::DELETE,
        &format!("/api/v1/tasks/{id}").parse().unwrap(),
        &context,
    );

    match state.tasks.delete(id).await {
        Ok(()) => no_content().into_response(),
        Err(e) => {
            if !matches!(e, RepositoryError::RecordNotFound { .. }) {
                tracing::error!("Failed to delete task {}: {}", id, e);
            }
            handle_error(AppError::from(e)).into_response()
        }
    }
}
