//! User HTTP handlers
//!
//! This module contains HTTP handlers for user operations. All handlers are
//! thin wrappers around repository calls, focusing only on HTTP concerns
//! like request/response mapping.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, RepositoryError};
use crate::models::{User, UserCreateRequest};
use crate::web::{
    extractors::{PaginationParams, RequestContext},
    responses::{created, handle_error, no_content, not_found},
    utils::log_request,
    AppState,
};

/// Request DTO for creating a user
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn into_repository_request(self) -> UserCreateRequest {
        UserCreateRequest {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Response DTO for a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    // Note: password is intentionally omitted for security
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    context: RequestContext,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::POST,
        &"/api/v1/users".parse().unwrap(),
        &context,
    );

    match state.users.create(request.into_repository_request()).await {
        Ok(user) => created(UserResponse::from(user)).into_response(),
        Err(e) => {
            if matches!(e, RepositoryError::ConstraintViolation { .. }) {
                tracing::debug!("User creation rejected: {}", e);
            } else {
                tracing::error!("Failed to create user: {}", e);
            }
            handle_error(AppError::from(e)).into_response()
        }
    }
}

/// List users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip", example = 0),
        ("limit" = Option<u64>, Query, description = "Maximum records to return", example = 10),
    ),
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    context: RequestContext,
    pagination: PaginationParams,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/api/v1/users".parse().unwrap(),
        &context,
    );

    match state.users.list(pagination.skip, pagination.limit).await {
        Ok(users) => {
            let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            Json(response).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            handle_error(AppError::from(e)).into_response()
        }
    }
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID", example = 1),
    ),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &format!("/api/v1/users/{id}").parse().unwrap(),
        &context,
    );

    match state.users.find_by_id(id).await {
        Ok(Some(user)) => Json(UserResponse::from(user)).into_response(),
        Ok(None) => not_found("user", &id.to_string()).into_response(),
        Err(e) => {
            tracing::error!("Failed to get user {}: {}", id, e);
            handle_error(AppError::from(e)).into_response()
        }
    }
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID", example = 1),
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::DELETE,
        &format!("/api/v1/users/{id}").parse().unwrap(),
        &context,
    );

    match state.users.delete(id).await {
        Ok(()) => no_content().into_response(),
        Err(e) => {
            if !matches!(e, RepositoryError::RecordNotFound { .. }) {
                tracing::error!("Failed to delete user {}: {}", id, e);
            }
            handle_error(AppError::from(e)).into_response()
        }
    }
}
