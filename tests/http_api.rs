//! End-to-end tests for the REST API over an in-memory SQLite database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::Service;

use accounts_service::application::users::{RecordValidator, UserService};
use accounts_service::create_api_router;
use accounts_service::infrastructure::crypto::PasswordHasher;
use accounts_service::infrastructure::database::migrator::Migrator;
use accounts_service::infrastructure::database::repositories::UserRepository;

async fn app() -> Router {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repo = Arc::new(UserRepository::new(db.clone()));
    let user_service = Arc::new(UserService::new(
        repo,
        RecordValidator::new(),
        PasswordHasher::new(4), // low cost keeps the tests fast
    ));

    create_api_router(db, user_service)
}

async fn send(app: &mut Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn registration_body() -> Value {
    json!({
        "email": "a@b.com",
        "password": "Passw0rd!",
        "first_name": "Alicia",
        "last_name": "Gomez",
        "role": "admin"
    })
}

async fn register(app: &mut Router, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/api/v1/users/register", Some(body)).await
}

#[tokio::test]
async fn register_returns_the_persisted_record_without_the_hash() {
    let mut app = app().await;

    let (status, body) = register(&mut app, registration_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "success");
    assert_eq!(body["error"], "");

    let record = &body["res"];
    assert!(record["id"].as_i64().unwrap() > 0);
    assert_eq!(record["email"], "a@b.com");
    assert_eq!(record["role"], "admin");
    assert_eq!(
        record["registered_at"],
        chrono::Local::now().date_naive().to_string()
    );
    // credential material never crosses the HTTP boundary
    assert!(record.get("password").is_none());
    assert!(record.get("password_hash").is_none());
}

#[tokio::test]
async fn register_reports_every_violated_field() {
    let mut app = app().await;

    let (status, body) = register(
        &mut app,
        json!({"email": "not-an-email", "password": "Passw0rd!", "first_name": "Ana"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["state"], "error");
    assert_eq!(body["res"], Value::Null);

    let message = body["error"].as_str().unwrap();
    assert!(message.contains("email: Email must have a valid format"));
    assert!(message.contains("first_name: First name must be at least 5 characters"));
    assert!(message.contains("last_name: Last name is required"));
    assert!(message.contains("role: Role is required"));
    assert!(message.contains("; "));
}

#[tokio::test]
async fn register_twice_with_the_same_email_is_a_conflict() {
    let mut app = app().await;

    let (status, _) = register(&mut app, registration_body()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = register(&mut app, registration_body()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["state"], "error");
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn register_rejects_weak_passwords() {
    let mut app = app().await;

    let mut body = registration_body();
    body["password"] = json!("nodigitsorcaps");
    let (status, body) = register(&mut app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Password must be 8-15 characters"));
}

#[tokio::test]
async fn login_round_trip() {
    let mut app = app().await;
    register(&mut app, registration_body()).await;

    let (status, body) = send(
        &mut app,
        Method::POST,
        "/api/v1/users/login",
        Some(json!({"email": "a@b.com", "password": "Passw0rd!"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "success");
    assert_eq!(body["res"]["email"], "a@b.com");

    let (status, body) = send(
        &mut app,
        Method::POST,
        "/api/v1/users/login",
        Some(json!({"email": "a@b.com", "password": "Wr0ngPass!"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Incorrect password");

    let (status, body) = send(
        &mut app,
        Method::POST,
        "/api/v1/users/login",
        Some(json!({"email": "ghost@b.com", "password": "Passw0rd!"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn update_role_maps_statuses_per_case() {
    let mut app = app().await;
    let (_, body) = register(&mut app, registration_body()).await;
    let id = body["res"]["id"].as_i64().unwrap();

    // success branch returns success, not the original's 404
    let (status, body) = send(
        &mut app,
        Method::PUT,
        &format!("/api/v1/users/{id}/role?new_role=CLIENTE"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "success");
    assert_eq!(body["res"]["role"], "cliente");

    let (status, body) = send(
        &mut app,
        Method::PUT,
        &format!("/api/v1/users/{id}/role?new_role=manager"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid role");

    let (status, body) = send(
        &mut app,
        Method::PUT,
        "/api/v1/users/999/role?new_role=admin",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn update_profile_preserves_identity_and_credentials() {
    let mut app = app().await;
    let (_, body) = register(&mut app, registration_body()).await;
    let id = body["res"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &mut app,
        Method::PUT,
        &format!("/api/v1/users/{id}/profile"),
        Some(json!({
            "email": "other@b.com",
            "password": "Hacked123!",
            "first_name": "Beatriz",
            "last_name": "Moreno",
            "role": "cliente",
            "address": "Calle Mayor 12, Madrid",
            "phone": "987654321"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "success");
    assert_eq!(body["error"], "User updated successfully");
    assert_eq!(body["res"]["first_name"], "Beatriz");
    assert_eq!(body["res"]["address"], "Calle Mayor 12, Madrid");
    // email and role keep their stored values
    assert_eq!(body["res"]["email"], "a@b.com");
    assert_eq!(body["res"]["role"], "admin");

    // the original password still works
    let (status, _) = send(
        &mut app,
        Method::POST,
        "/api/v1/users/login",
        Some(json!({"email": "a@b.com", "password": "Passw0rd!"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_then_list() {
    let mut app = app().await;
    let (_, body) = register(&mut app, registration_body()).await;
    let id = body["res"]["id"].as_i64().unwrap();

    let (status, body) = send(&mut app, Method::DELETE, "/api/v1/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, body) =
        send(&mut app, Method::DELETE, &format!("/api/v1/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "success");
    assert_eq!(body["res"], "User deleted successfully");

    let (status, body) = send(&mut app, Method::GET, "/api/v1/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "success");
    assert_eq!(body["res"], json!([]));
}

#[tokio::test]
async fn list_returns_every_registered_user() {
    let mut app = app().await;
    register(&mut app, registration_body()).await;

    let mut second = registration_body();
    second["email"] = json!("c@d.com");
    register(&mut app, second).await;

    let (status, body) = send(&mut app, Method::GET, "/api/v1/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["res"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "a@b.com");
    assert_eq!(users[1]["email"], "c@d.com");
}

#[tokio::test]
async fn health_reports_ok_with_a_live_database() {
    let mut app = app().await;

    let (status, body) = send(&mut app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["reachable"], true);
}
