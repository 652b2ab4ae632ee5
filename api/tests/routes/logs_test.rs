use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::app::spawn_app;

#[tokio::test]
async fn log_creation_assigns_id_and_timestamp() {
    let app = spawn_app().await;

    let (status, body) = app
        .post(
            "/log",
            json!({
                "user_id": app.admin.id,
                "action": "DELETE",
                "entity_type": "class",
                "entity_id": "some-class"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn log_creation_requires_every_field() {
    let app = spawn_app().await;

    let (status, _) = app
        .post(
            "/log",
            json!({"user_id": app.admin.id, "action": "", "entity_type": "class", "entity_id": "x"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn log_lifecycle_and_pagination() {
    let app = spawn_app().await;
    let mut last_id = String::new();
    for i in 0..3 {
        let (_, body) = app
            .post(
                "/log",
                json!({
                    "user_id": app.admin.id,
                    "action": format!("ACTION_{i}"),
                    "entity_type": "student",
                    "entity_id": format!("e{i}")
                }),
            )
            .await;
        last_id = body["data"]["id"].as_str().unwrap().to_owned();
    }

    let (status, body) = app.get(&format!("/log/{last_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["action"], "ACTION_2");

    let (_, body) = app.get("/logs?page=1&size=2").await;
    assert_eq!(body["data"]["totalItems"], 3);
    assert_eq!(body["data"]["totalPages"], 2);

    let (status, _) = app.delete(&format!("/log/{last_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.delete(&format!("/log/{last_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
