use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::app::{TestApp, spawn_app};

async fn create_class(app: &TestApp, name: &str, room: &str) -> String {
    let (status, body) = app
        .post(
            "/class",
            json!({
                "name": name,
                "room_number": room,
                "start_time": "08:30",
                "end_time": "10:00"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_owned()
}

async fn create_student(app: &TestApp, name: &str) -> String {
    let (status, body) = app.post("/student", json!({"name": name})).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn class_crud_lifecycle() {
    let app = spawn_app().await;
    let id = create_class(&app, "Operating Systems", "IT 4-1").await;

    let (status, body) = app.get(&format!("/class/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Operating Systems");

    let (status, body) = app
        .put(&format!("/class/{id}"), json!({"name": "OS Renamed"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "OS Renamed");
    // untouched fields survive a partial update
    assert_eq!(body["data"]["room_number"], "IT 4-1");

    let (status, _) = app.delete(&format!("/class/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/class/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_class_reads_as_not_found() {
    let app = spawn_app().await;

    let (status, body) = app.get("/class/no-such-id").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Class with id 'no-such-id' not found");
}

#[tokio::test]
async fn deleting_a_missing_class_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = app.delete("/class/no-such-id").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn class_list_pagination_math() {
    let app = spawn_app().await;
    for i in 0..5 {
        create_class(&app, &format!("Class {i}"), "R1").await;
    }

    let (status, body) = app.get("/classes?page=2&size=2").await;
    assert_eq!(status, StatusCode::OK);
    let page = &body["data"];
    assert_eq!(page["page"], 2);
    assert_eq!(page["pageSize"], 2);
    assert_eq!(page["totalItems"], 5);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["data"].as_array().unwrap().len(), 2);

    // beyond the last page: empty data, unchanged totals
    let (status, body) = app.get("/classes?page=9&size=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalItems"], 5);
    assert!(body["data"]["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn page_size_is_capped() {
    let app = spawn_app().await;
    create_class(&app, "Solo", "R1").await;

    let (_, body) = app.get("/classes?page=1&pageSize=500").await;

    assert_eq!(body["data"]["pageSize"], 100);
}

#[tokio::test]
async fn room_schedule_lists_matching_classes_only() {
    let app = spawn_app().await;
    create_class(&app, "A", "Lab2").await;
    create_class(&app, "B", "Lab2").await;
    create_class(&app, "C", "Lab9").await;

    let (status, body) = app.get("/schedule/Lab2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn student_assignment_is_idempotent_per_pair() {
    let app = spawn_app().await;
    let class_id = create_class(&app, "Databases", "R1").await;
    let s1 = create_student(&app, "Thando").await;
    let s2 = create_student(&app, "Pieter").await;

    let payload = json!({"student_ids": [s1, s2]});
    let (first, _) = app
        .post(&format!("/class/{class_id}/students"), payload.clone())
        .await;
    let (second, _) = app
        .post(&format!("/class/{class_id}/students"), payload)
        .await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CREATED);

    let (_, body) = app.get(&format!("/class/{class_id}/students")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn student_assignment_stops_at_the_first_unknown_id() {
    let app = spawn_app().await;
    let class_id = create_class(&app, "Networks", "R1").await;
    let s1 = create_student(&app, "Lerato").await;
    let s2 = create_student(&app, "Anika").await;

    let (status, _) = app
        .post(
            &format!("/class/{class_id}/students"),
            json!({"student_ids": [s1, "ghost", s2]}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the insert before the failure stays; the one after never happens
    let (_, body) = app.get(&format!("/class/{class_id}/students")).await;
    let assigned: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(assigned, vec![s1.as_str()]);
}

#[tokio::test]
async fn removing_a_student_assignment() {
    let app = spawn_app().await;
    let class_id = create_class(&app, "AI", "R1").await;
    let student_id = create_student(&app, "Sipho").await;
    app.post(
        &format!("/class/{class_id}/students"),
        json!({"student_ids": [student_id]}),
    )
    .await;

    let uri = format!("/class/{class_id}/student/{student_id}");
    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn professor_assignment_round_trip() {
    let app = spawn_app().await;
    let class_id = create_class(&app, "Compilers", "R1").await;
    app.anonymous(
        Method::POST,
        "/register",
        Some(json!({"username": "prof.smith", "password": "pw"})),
    )
    .await;

    let payload = json!({"username": "prof.smith", "class_id": class_id});
    let (status, _) = app.post("/class/assign", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.post("/class/assign", payload.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app.get(&format!("/class/{class_id}/professors")).await;
    assert_eq!(body["data"], json!(["prof.smith"]));

    let (status, _) = app.post("/class/unassign", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    // unassigning an absent assignment is not an error
    let (status, _) = app.post("/class/unassign", payload).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/class/{class_id}/professors")).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn assigning_an_unknown_professor_or_class_is_not_found() {
    let app = spawn_app().await;
    let class_id = create_class(&app, "Graphics", "R1").await;

    let (status, _) = app
        .post("/class/assign", json!({"username": "ghost", "class_id": class_id}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post("/class/assign", json!({"username": "admin", "class_id": "no-such"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_class_does_not_cascade_to_its_sessions() {
    let app = spawn_app().await;
    let class_id = create_class(&app, "Doomed", "R1").await;
    let (_, body) = app
        .post(
            "/session",
            json!({
                "start_time": "2026-03-02T08:30:00Z",
                "end_time": "2026-03-02T10:00:00Z",
                "class_id": class_id,
                "professor_id": app.admin.id
            }),
        )
        .await;
    let session_id = body["data"]["id"].as_str().unwrap().to_owned();

    app.delete(&format!("/class/{class_id}")).await;

    let (status, _) = app.get(&format!("/session/{session_id}")).await;
    assert_eq!(status, StatusCode::OK);
}
