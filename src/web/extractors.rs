//! Request extractors and validation
//!
//! This module provides custom extractors for request validation,
//! pagination parameters, and other common request processing needs.

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::responses::{validation_error, ApiError, ValidationErrorResponse};

fn default_limit() -> u64 {
    10
}

/// Offset/limit window for plain listings
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    /// Validate pagination parameters
    ///
    /// Negative values never reach this point (the fields are unsigned and a
    /// malformed query string is rejected during deserialization); a zero
    /// limit is rejected here instead of propagating into page arithmetic.
    pub fn validate(&self) -> Result<(), Vec<ValidationErrorResponse>> {
        if self.limit == 0 {
            return Err(vec![ValidationErrorResponse {
                field: "limit".to_string(),
                message: "Limit must be a positive integer".to_string(),
            }]);
        }
        Ok(())
    }
}

impl<S> FromRequestParts<S> for PaginationParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiError::new("Invalid pagination parameters".to_string())),
                )
                    .into_response()
            })?;

        params.validate().map_err(validation_error)?;

        Ok(params)
    }
}

/// Query parameters accepted by the task listing endpoint
///
/// The three filter values are kept as the raw strings they arrived as: the
/// response echoes them back verbatim, and the repository layer owns their
/// interpretation.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub status: String,
}

impl Default for TaskListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            subject: String::new(),
            priority: String::new(),
            status: String::new(),
        }
    }
}

impl TaskListParams {
    pub fn validate(&self) -> Result<(), Vec<ValidationErrorResponse>> {
        if self.limit == 0 {
            return Err(vec![ValidationErrorResponse {
                field: "limit".to_string(),
                message: "Limit must be a positive integer".to_string(),
            }]);
        }
        Ok(())
    }
}

impl<S> FromRequestParts<S> for TaskListParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<TaskListParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiError::new("Invalid list parameters".to_string())),
                )
                    .into_response()
            })?;

        params.validate().map_err(validation_error)?;

        Ok(params)
    }
}

/// Request context information
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_agent: Option<String>,
    pub real_ip: Option<String>,
    pub request_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            user_agent: None,
            real_ip: None,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let real_ip = parts
            .headers
            .get("x-real-ip")
            .or_else(|| parts.headers.get("x-forwarded-for"))
            .and_then(|h| h.to_str().ok())
            .map(|s| s.split(',').next().unwrap_or(s).trim().to_string());

        Ok(Self {
            user_agent,
            real_ip,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_rejected() {
        let params = TaskListParams {
            limit: 0,
            ..Default::default()
        };
        let errors = params.validate().unwrap_err();
        assert_eq!(errors[0].field, "limit");
    }

    #[test]
    fn defaults_match_listing_contract() {
        let params = TaskListParams::default();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 10);
        assert_eq!(params.subject, "");
        assert_eq!(params.priority, "");
        assert_eq!(params.status, "");
        assert!(params.validate().is_ok());
    }
}
