use axum::http::{Method, StatusCode};
use sea_orm::EntityTrait;
use serde_json::json;

use crate::helpers::app::spawn_app;

#[tokio::test]
async fn register_creates_a_user_without_exposing_the_password() {
    let app = spawn_app().await;

    let (status, body) = app
        .anonymous(
            Method::POST,
            "/register",
            Some(json!({"username": "alice", "password": "hunter2"})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "alice");
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_rejects_a_taken_username() {
    let app = spawn_app().await;
    let payload = json!({"username": "bob", "password": "pw"});

    let (first, _) = app.anonymous(Method::POST, "/register", Some(payload.clone())).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = app.anonymous(Method::POST, "/register", Some(payload)).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Username already taken");
}

#[tokio::test]
async fn register_rejects_empty_fields() {
    let app = spawn_app().await;

    let (status, body) = app
        .anonymous(
            Method::POST,
            "/register",
            Some(json!({"username": "", "password": "pw"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn login_returns_a_usable_token() {
    let app = spawn_app().await;
    app.anonymous(
        Method::POST,
        "/register",
        Some(json!({"username": "carol", "password": "pw"})),
    )
    .await;

    let (status, body) = app
        .anonymous(
            Method::POST,
            "/login",
            Some(json!({"username": "carol", "password": "pw"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().unwrap().to_owned();
    assert!(!token.is_empty());
    assert_eq!(body["data"]["user"]["username"], "carol");

    let (status, _) = app.with_token(Method::GET, "/classes", &token, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_failure_message_does_not_distinguish_cause() {
    let app = spawn_app().await;
    app.anonymous(
        Method::POST,
        "/register",
        Some(json!({"username": "dave", "password": "pw"})),
    )
    .await;

    let (unknown_status, unknown_body) = app
        .anonymous(
            Method::POST,
            "/login",
            Some(json!({"username": "nobody", "password": "pw"})),
        )
        .await;
    let (wrong_status, wrong_body) = app
        .anonymous(
            Method::POST,
            "/login",
            Some(json!({"username": "dave", "password": "wrong"})),
        )
        .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_body["message"], wrong_body["message"]);
    assert_eq!(unknown_body["message"], "Invalid credentials");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = spawn_app().await;

    let (status, body) = app.anonymous(Method::GET, "/classes", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authentication required");
}

#[tokio::test]
async fn tampered_tokens_are_rejected() {
    let app = spawn_app().await;
    let tampered = format!("{}x", app.token);

    let (status, _) = app.with_token(Method::GET, "/classes", &tampered, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn tokens_for_deleted_users_are_rejected() {
    let app = spawn_app().await;

    db::models::user::Entity::delete_by_id(app.admin.id.clone())
        .exec(&app.db)
        .await
        .unwrap();

    let (status, body) = app.get("/classes").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn health_is_public() {
    let app = spawn_app().await;

    let (status, body) = app.anonymous(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}
