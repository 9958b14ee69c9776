//! HTTP response types and utilities
//!
//! This module provides standardized error responses and the mapping from
//! application errors to HTTP status codes, keeping the API consistent
//! across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::errors::{AppError, RepositoryError};

/// Standard error body returned for every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
    /// Per-field details, when the failure is a validation failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    /// Response timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ApiError {
    pub fn new(message: String) -> Self {
        Self {
            error: message,
            details: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn with_details(message: String, details: HashMap<String, String>) -> Self {
        Self {
            error: message,
            details: Some(details),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Convert AppError to the appropriate HTTP response
pub fn handle_error(error: AppError) -> impl IntoResponse {
    let (status, message) = match &error {
        AppError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::NotFound { resource, id } => (
            StatusCode::NOT_FOUND,
            format!("{resource} with id '{id}' not found"),
        ),
        AppError::Repository(RepositoryError::RecordNotFound {
            table,
            field,
            value,
        }) => (
            StatusCode::NOT_FOUND,
            format!("{table} with {field} '{value}' not found"),
        ),
        AppError::Repository(RepositoryError::ConstraintViolation { message, .. }) => {
            (StatusCode::CONFLICT, message.clone())
        }
        AppError::Repository(RepositoryError::InvalidQuery { field, message }) => {
            (StatusCode::BAD_REQUEST, format!("{field}: {message}"))
        }
        AppError::Repository(RepositoryError::Database(_)) | AppError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database operation failed".to_string(),
        ),
        AppError::Web(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        AppError::Configuration { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Configuration error: {message}"),
        ),
        AppError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal error: {message}"),
        ),
    };

    (status, Json(ApiError::new(message)))
}

/// Success response helpers
pub fn created<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::CREATED, Json(data))
}

pub fn no_content() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

/// Error response helpers
pub fn bad_request(message: &str) -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::new(message.to_string())),
    )
}

pub fn not_found(resource: &str, id: &str) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(format!(
            "{resource} with id '{id}' not found"
        ))),
    )
}

pub fn internal_error(message: &str) -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(message.to_string())),
    )
}

/// Validation error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub field: String,
    pub message: String,
}

pub fn validation_error(errors: Vec<ValidationErrorResponse>) -> Response {
    let mut details = HashMap::new();
    for error in &errors {
        details.insert(error.field.clone(), error.message.clone());
    }

    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details(
            "Validation failed".to_string(),
            details,
        )),
    )
        .into_response()
}
