//! Web layer module
//!
//! This module provides the HTTP interface for the taskhub application.
//! Handlers are thin and delegate to the repository layer; responses,
//! extractors and utilities keep request handling consistent across
//! endpoints.

use anyhow::Result;
use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    database::{
        repositories::{TaskSeaOrmRepository, UserSeaOrmRepository},
        Database,
    },
};

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod responses;
pub mod utils;

// Re-export commonly used types
pub use extractors::{PaginationParams, RequestContext, TaskListParams};
pub use responses::{handle_error, ApiError};

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    /// Create a new web server
    pub async fn new(config: Config, database: Database) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;

        let state = AppState {
            users: UserSeaOrmRepository::new(database.connection()),
            tasks: TaskSeaOrmRepository::new(database.connection()),
            database,
            config,
            start_time: chrono::Utc::now(),
        };
        let app = Self::create_router(state);

        Ok(Self { app, addr })
    }

    /// Create the router with all routes and middleware
    fn create_router(state: AppState) -> Router {
        Router::new()
            // Health check endpoint (no auth required)
            .route("/health", get(handlers::health::health_check))
            // OpenAPI documentation
            .merge(Self::openapi_routes())
            // API v1 routes
            .nest("/api/v1", Self::api_v1_routes())
            // Middleware (applied in reverse order)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            // Shared state
            .with_state(state)
    }

    /// OpenAPI documentation routes
    fn openapi_routes() -> Router<AppState> {
        use utoipa_swagger_ui::SwaggerUi;

        Router::new()
            // Swagger UI integration - serves both /docs and /api/openapi.json
            .merge(SwaggerUi::new("/docs").url("/api/openapi.json", openapi::api_doc()))
    }

    /// API v1 routes
    fn api_v1_routes() -> Router<AppState> {
        Router::new()
            .route(
                "/users",
                get(handlers::users::list_users).post(handlers::users::create_user),
            )
            .route(
                "/users/{id}",
                get(handlers::users::get_user).delete(handlers::users::delete_user),
            )
            .route(
                "/tasks",
                get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
            )
            .route(
                "/tasks/due_date/{due_date}",
                get(handlers::tasks::get_tasks_by_due_date),
            )
            .route(
                "/tasks/{id}",
                get(handlers::tasks::get_task)
                    .put(handlers::tasks::update_task)
                    .delete(handlers::tasks::delete_task),
            )
    }

    /// Start the web server, shutting down gracefully on SIGINT/SIGTERM
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;

        let shutdown_signal = async {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{signal, SignalKind};
                let mut sigterm =
                    signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
                let mut sigint =
                    signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

                tokio::select! {
                    _ = sigterm.recv() => {
                        tracing::info!("Received SIGTERM, shutting down gracefully");
                    }
                    _ = sigint.recv() => {
                        tracing::info!("Received SIGINT (Ctrl+C), shutting down gracefully");
                    }
                }
            }

            #[cfg(not(unix))]
            {
                use tokio::signal;
                signal::ctrl_c()
                    .await
                    .expect("failed to install Ctrl+C handler");
                tracing::info!("Received Ctrl+C, shutting down gracefully");
            }
        };

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal)
            .await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Router for driving the API in tests without binding a socket
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub config: Config,
    pub users: UserSeaOrmRepository,
    pub tasks: TaskSeaOrmRepository,
    /// Application start time for uptime calculation
    pub start_time: chrono::DateTime<chrono::Utc>,
}
