//! OpenAPI documentation generation using utoipa
//!
//! Handler functions carry `#[utoipa::path]` annotations; this module
//! collects them into one specification served next to the Swagger UI.

use utoipa::OpenApi;

/// Main OpenAPI specification for the taskhub API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "taskhub API",
        description = "Task and user management REST API with filtered, paginated task listings.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    tags(
        (name = "tasks", description = "Task management and filtered listings"),
        (name = "users", description = "User management"),
        (name = "health", description = "Service health monitoring"),
    ),
    paths(
        crate::web::handlers::health::health_check,
        crate::web::handlers::users::create_user,
        crate::web::handlers::users::list_users,
        crate::web::handlers::users::get_user,
        crate::web::handlers::users::delete_user,
        crate::web::handlers::tasks::list_tasks,
        crate::web::handlers::tasks::create_task,
        crate::web::handlers::tasks::get_task,
        crate::web::handlers::tasks::get_tasks_by_due_date,
        crate::web::handlers::tasks::update_task,
        crate::web::handlers::tasks::delete_task,
    ),
    components(schemas(
        crate::models::PageInfo,
        crate::web::handlers::health::HealthResponse,
        crate::web::handlers::users::CreateUserRequest,
        crate::web::handlers::users::UserResponse,
        crate::web::handlers::tasks::TaskPayload,
        crate::web::handlers::tasks::TaskResponse,
        crate::web::handlers::tasks::TaskListResponse,
        crate::web::handlers::tasks::FilterEcho,
        crate::web::responses::ApiError,
    ))
)]
pub struct ApiDoc;

/// Build the OpenAPI document served at `/api/openapi.json`
pub fn api_doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_includes_all_routes() {
        let doc = api_doc();
        let paths = doc.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/v1/users"));
        assert!(paths.contains_key("/api/v1/users/{id}"));
        assert!(paths.contains_key("/api/v1/tasks"));
        assert!(paths.contains_key("/api/v1/tasks/{id}"));
        assert!(paths.contains_key("/api/v1/tasks/due_date/{due_date}"));
    }
}
