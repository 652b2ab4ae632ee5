use axum::http::StatusCode;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde_json::json;

use crate::helpers::app::{TestApp, spawn_app};

async fn create_student(app: &TestApp, name: &str) -> String {
    let (status, body) = app.post("/student", json!({"name": name})).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn student_creation_requires_a_name() {
    let app = spawn_app().await;

    let (status, body) = app.post("/student", json!({"name": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn absent_image_stores_as_empty_string() {
    let app = spawn_app().await;
    let id = create_student(&app, "Naledi").await;

    let (_, body) = app.get(&format!("/student/{id}")).await;

    assert_eq!(body["data"]["image"], "");
}

#[tokio::test]
async fn student_crud_lifecycle() {
    let app = spawn_app().await;
    let id = create_student(&app, "Johan").await;

    let (status, body) = app
        .put(
            &format!("/student/{id}"),
            json!({"image": "portraits/johan.png"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Johan");
    assert_eq!(body["data"]["image"], "portraits/johan.png");

    let (status, _) = app.delete(&format!("/student/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/student/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/student/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_student_removes_assignment_rows() {
    let app = spawn_app().await;
    let student_id = create_student(&app, "Zinhle").await;

    let (_, body) = app
        .post(
            "/class",
            json!({"name": "Calc", "room_number": "M1", "start_time": "09:00", "end_time": "10:00"}),
        )
        .await;
    let class_id = body["data"]["id"].as_str().unwrap().to_owned();
    app.post(
        &format!("/class/{class_id}/students"),
        json!({"student_ids": [student_id]}),
    )
    .await;

    let (_, body) = app
        .post(
            "/session",
            json!({
                "start_time": "2026-03-02T09:00:00Z",
                "end_time": "2026-03-02T10:00:00Z",
                "class_id": class_id,
                "professor_id": app.admin.id
            }),
        )
        .await;
    let session_id = body["data"]["id"].as_str().unwrap().to_owned();
    db::models::session_student::ActiveModel {
        student_id: Set(student_id.clone()),
        session_id: Set(session_id.clone()),
    }
    .insert(&app.db)
    .await
    .unwrap();

    let (status, _) = app.delete(&format!("/student/{student_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get(&format!("/class/{class_id}/students")).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    let (_, body) = app.get(&format!("/session/{session_id}/students")).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn student_list_pagination() {
    let app = spawn_app().await;
    for i in 0..3 {
        create_student(&app, &format!("Student {i}")).await;
    }

    let (_, body) = app.get("/students?page=1&size=2").await;

    let page = &body["data"];
    assert_eq!(page["totalItems"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
}
