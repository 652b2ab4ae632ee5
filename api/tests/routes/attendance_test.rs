use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::app::{TestApp, spawn_app};

async fn seed_records(app: &TestApp, count: usize) -> (String, Vec<String>) {
    let (_, body) = app
        .post(
            "/class",
            json!({"name": "Stats", "room_number": "S1", "start_time": "14:00", "end_time": "15:30"}),
        )
        .await;
    let class_id = body["data"]["id"].as_str().unwrap().to_owned();

    let (_, body) = app
        .post(
            "/session",
            json!({
                "start_time": "2026-03-02T14:00:00Z",
                "end_time": "2026-03-02T15:30:00Z",
                "class_id": class_id,
                "professor_id": app.admin.id
            }),
        )
        .await;
    let session_id = body["data"]["id"].as_str().unwrap().to_owned();

    let mut record_ids = Vec::new();
    for i in 0..count {
        let (_, body) = app.post("/student", json!({"name": format!("S{i}")})).await;
        let student_id = body["data"]["id"].as_str().unwrap().to_owned();
        let (status, body) = app
            .post(
                &format!("/session/{session_id}/attendance"),
                json!({"student_id": student_id, "check_in": "2026-03-02T14:05:00Z"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        record_ids.push(body["data"]["id"].as_str().unwrap().to_owned());
    }

    (session_id, record_ids)
}

#[tokio::test]
async fn attendance_list_pagination() {
    let app = spawn_app().await;
    seed_records(&app, 3).await;

    let (status, body) = app.get("/attendance?page=2&size=2").await;

    assert_eq!(status, StatusCode::OK);
    let page = &body["data"];
    assert_eq!(page["totalItems"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_record_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = app.get("/attendance/no-such").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn review_status_transitions() {
    let app = spawn_app().await;
    let (_, record_ids) = seed_records(&app, 1).await;
    let uri = format!("/attendance/{}", record_ids[0]);

    let (status, body) = app.put(&uri, json!({"status": "ESCALATED"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ESCALATED");

    // de-escalate back to pending
    let (status, body) = app.put(&uri, json!({"status": ""})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], Value::Null);

    let (status, body) = app.put(&uri, json!({"status": "DISMISSED"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "DISMISSED");
}

#[tokio::test]
async fn unknown_status_values_are_rejected() {
    let app = spawn_app().await;
    let (_, record_ids) = seed_records(&app, 1).await;

    let (status, body) = app
        .put(&format!("/attendance/{}", record_ids[0]), json!({"status": "MAYBE"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status value: 'MAYBE'");
}

#[tokio::test]
async fn review_fields_update_independently() {
    let app = spawn_app().await;
    let (_, record_ids) = seed_records(&app, 1).await;
    let uri = format!("/attendance/{}", record_ids[0]);

    let (_, body) = app
        .put(
            &uri,
            json!({"flagged": true, "fr_identified_id": "someone-else", "video_key": "clips/a.mp4"}),
        )
        .await;
    assert_eq!(body["data"]["flagged"], true);
    assert_eq!(body["data"]["fr_identified_id"], "someone-else");
    assert_eq!(body["data"]["video_key"], "clips/a.mp4");

    // an absent field stays as it was
    let (_, body) = app.put(&uri, json!({"flagged": false})).await;
    assert_eq!(body["data"]["flagged"], false);
    assert_eq!(body["data"]["video_key"], "clips/a.mp4");
}

#[tokio::test]
async fn feed_walker_returns_every_record() {
    let app = spawn_app().await;
    let (_, record_ids) = seed_records(&app, 7).await;

    let records = api::services::attendance_feed::fetch_all(&app.db).await.unwrap();

    assert_eq!(records.len(), record_ids.len());
}
