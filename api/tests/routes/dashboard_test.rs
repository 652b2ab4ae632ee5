use axum::http::{Method, StatusCode};
use sea_orm::EntityTrait;
use serde_json::json;

use crate::helpers::app::{TestApp, spawn_app};

struct Fixture {
    class_id: String,
    student_ids: Vec<String>,
    session_ids: Vec<String>,
}

async fn seed_class_view(app: &TestApp) -> Fixture {
    let (_, body) = app
        .post(
            "/class",
            json!({"name": "Chemistry", "room_number": "C1", "start_time": "08:00", "end_time": "09:30"}),
        )
        .await;
    let class_id = body["data"]["id"].as_str().unwrap().to_owned();

    app.anonymous(
        Method::POST,
        "/register",
        Some(json!({"username": "prof.jones", "password": "pw"})),
    )
    .await;
    app.post("/class/assign", json!({"username": "prof.jones", "class_id": class_id}))
        .await;

    let mut student_ids = Vec::new();
    for name in ["Neo", "Mia"] {
        let (_, body) = app.post("/student", json!({"name": name})).await;
        student_ids.push(body["data"]["id"].as_str().unwrap().to_owned());
    }
    app.post(
        &format!("/class/{class_id}/students"),
        json!({"student_ids": student_ids}),
    )
    .await;

    let mut session_ids = Vec::new();
    // created out of order; the dashboard sorts them by start time
    for start in ["2026-03-09T08:00:00Z", "2026-03-02T08:00:00Z"] {
        let (_, body) = app
            .post(
                "/session",
                json!({
                    "start_time": start,
                    "end_time": "2026-03-09T09:30:00Z",
                    "class_id": class_id,
                    "professor_id": app.admin.id
                }),
            )
            .await;
        session_ids.push(body["data"]["id"].as_str().unwrap().to_owned());
    }

    app.post(
        &format!("/session/{}/attendance", session_ids[0]),
        json!({"student_id": student_ids[0], "check_in": "2026-03-09T08:04:00Z"}),
    )
    .await;

    Fixture {
        class_id,
        student_ids,
        session_ids,
    }
}

#[tokio::test]
async fn dashboard_aggregates_the_whole_class_view() {
    let app = spawn_app().await;
    let fixture = seed_class_view(&app).await;

    let (status, body) = app.get(&format!("/dashboard/{}", fixture.class_id)).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["class"]["name"], "Chemistry");
    assert_eq!(data["professors"], json!(["prof.jones"]));
    assert_eq!(data["students"].as_array().unwrap().len(), 2);

    let sessions = data["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    // ordered by start time, not creation order
    assert_eq!(sessions[0]["id"], fixture.session_ids[1].as_str());
    assert_eq!(sessions[1]["id"], fixture.session_ids[0].as_str());

    let attendance = &data["attendance"][&fixture.session_ids[0]];
    assert_eq!(attendance.as_array().unwrap().len(), 1);
    assert_eq!(
        attendance[0]["student_id"],
        fixture.student_ids[0].as_str()
    );
}

#[tokio::test]
async fn dashboard_for_an_unknown_class_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = app.get("/dashboard/no-such-class").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_fails_whole_when_an_assigned_student_is_missing() {
    let app = spawn_app().await;
    let fixture = seed_class_view(&app).await;

    // remove the student row but leave the assignment behind
    db::models::student::Entity::delete_by_id(fixture.student_ids[0].clone())
        .exec(&app.db)
        .await
        .unwrap();

    let (status, _) = app.get(&format!("/dashboard/{}", fixture.class_id)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
