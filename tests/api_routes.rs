//! HTTP API contract tests
//!
//! These tests drive the full axum router over an in-memory database,
//! asserting the wire contract of every endpoint, including the exact
//! `{data, pagination, filters}` envelope of the task listing.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use taskhub::{config::Config, database::Database, web::WebServer};

async fn create_test_server() -> TestServer {
    let database = Database::new_in_memory()
        .await
        .expect("Failed to create test database");
    database.migrate().await.expect("Failed to run migrations");

    let server = WebServer::new(Config::default(), database)
        .await
        .expect("Failed to build web server");
    TestServer::new(server.router()).expect("Failed to start test server")
}

async fn create_user(server: &TestServer, name: &str, email: &str) -> i64 {
    let response = server
        .post("/api/v1/users")
        .json(&json!({"name": name, "email": email, "password": "secret"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_i64().expect("user id missing")
}

async fn create_task(server: &TestServer, payload: Value) -> Value {
    let response = server.post("/api/v1/tasks").json(&payload).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn health_endpoint_reports_connected_database() {
    let server = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn user_crud_round_trip() {
    let server = create_test_server().await;

    let id = create_user(&server, "alice", "alice@example.com").await;

    let response = server.get(&format!("/api/v1/users/{id}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    // The stored credential never leaves the service
    assert!(body.get("password").is_none());

    let response = server.get("/api/v1/users").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = server.delete(&format!("/api/v1/users/{id}")).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/v1/users/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_email_returns_conflict() {
    let server = create_test_server().await;

    create_user(&server, "alice", "alice@example.com").await;
    let response = server
        .post("/api/v1/users")
        .json(&json!({"name": "other", "email": "alice@example.com", "password": "x"}))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("already registered"));
}

#[tokio::test]
async fn task_create_applies_defaults() {
    let server = create_test_server().await;
    let user_id = create_user(&server, "alice", "alice@example.com").await;

    let task = create_task(
        &server,
        json!({"user_id": user_id, "title": "write report"}),
    )
    .await;
    assert_eq!(task["priority"], 3);
    assert_eq!(task["status"], "To Do");
    assert_eq!(task["user_id"], user_id);
    assert!(task["created_at"].is_string());
    assert!(task["updated_at"].is_string());
}

#[tokio::test]
async fn task_listing_envelope_matches_contract() {
    let server = create_test_server().await;
    let user_id = create_user(&server, "alice", "alice@example.com").await;

    let done_statuses = ["Done", "DONE-ish", "done", "Well done"];
    for i in 0..25usize {
        let status = if i < 4 { done_statuses[i] } else { "In Progress" };
        create_task(
            &server,
            json!({"user_id": user_id, "title": format!("task {i}"), "status": status}),
        )
        .await;
    }

    let response = server
        .get("/api/v1/tasks")
        .add_query_param("skip", "0")
        .add_query_param("limit", "10")
        .add_query_param("status", "done")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(
        body["pagination"],
        json!({
            "total_count": 4,
            "total_pages": 1,
            "current_page": 1,
            "per_page": 10,
            "has_next": false,
            "has_previous": false,
        })
    );
    assert_eq!(
        body["filters"],
        json!({"subject": "", "priority": "", "status": "done"})
    );

    // Third page of the unfiltered set
    let response = server
        .get("/api/v1/tasks")
        .add_query_param("skip", "20")
        .add_query_param("limit", "10")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["total_count"], 25);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["pagination"]["current_page"], 3);
    assert_eq!(body["pagination"]["has_next"], false);
    assert_eq!(body["pagination"]["has_previous"], true);
}

#[tokio::test]
async fn unparsable_priority_filter_is_ignored_but_echoed() {
    let server = create_test_server().await;
    let user_id = create_user(&server, "alice", "alice@example.com").await;
    for priority in [1, 2, 3] {
        create_task(
            &server,
            json!({"user_id": user_id, "title": "t", "priority": priority}),
        )
        .await;
    }

    let response = server
        .get("/api/v1/tasks")
        .add_query_param("priority", "abc")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["pagination"]["total_count"], 3);
    assert_eq!(body["filters"]["priority"], "abc");

    let response = server
        .get("/api/v1/tasks")
        .add_query_param("priority", "2")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["pagination"]["total_count"], 1);
    assert_eq!(body["data"][0]["priority"], 2);
}

#[tokio::test]
async fn invalid_pagination_parameters_are_rejected() {
    let server = create_test_server().await;

    let response = server
        .get("/api/v1/tasks")
        .add_query_param("limit", "0")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["details"]["limit"], "Limit must be a positive integer");

    let response = server
        .get("/api/v1/tasks")
        .add_query_param("skip", "-1")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get("/api/v1/users")
        .add_query_param("limit", "0")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn task_get_update_delete_round_trip() {
    let server = create_test_server().await;
    let user_id = create_user(&server, "alice", "alice@example.com").await;

    let task = create_task(
        &server,
        json!({
            "user_id": user_id,
            "title": "draft",
            "subject": "physics",
            "priority": 1,
            "status": "In Progress",
        }),
    )
    .await;
    let id = task["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/v1/tasks/{id}")).await;
    response.assert_status_ok();

    // Full replace; omitted priority/status keep the stored values
    let response = server
        .put(&format!("/api/v1/tasks/{id}"))
        .json(&json!({"user_id": user_id, "title": "final"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "final");
    assert_eq!(body["subject"], Value::Null);
    assert_eq!(body["priority"], 1);
    assert_eq!(body["status"], "In Progress");

    let response = server.delete(&format!("/api/v1/tasks/{id}")).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/v1/tasks/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .put("/api/v1/tasks/9999")
        .json(&json!({"user_id": user_id, "title": "missing"}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn due_date_endpoint_filters_by_calendar_day() {
    let server = create_test_server().await;
    let user_id = create_user(&server, "alice", "alice@example.com").await;

    for due in [
        "2026-08-06T00:00:00Z",
        "2026-08-06T23:59:59Z",
        "2026-08-07T00:00:00Z",
    ] {
        create_task(
            &server,
            json!({"user_id": user_id, "title": "t", "due_date": due}),
        )
        .await;
    }

    let response = server.get("/api/v1/tasks/due_date/2026-08-06").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);

    let response = server.get("/api/v1/tasks/due_date/not-a-date").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let server = create_test_server().await;

    let response = server.get("/api/openapi.json").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/api/v1/tasks"].is_object());
}
