//! Health check HTTP handlers

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::web::{extractors::RequestContext, utils::log_request, AppState};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub uptime_seconds: i64,
    pub version: String,
}

/// Health check endpoint
///
/// Returns basic application health status including database connectivity.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthResponse),
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(
        &axum::http::Method::GET,
        &"/health".parse().unwrap(),
        &context,
    );

    let database = match state.database.ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            "disconnected".to_string()
        }
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        uptime_seconds: (chrono::Utc::now() - state.start_time).num_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
