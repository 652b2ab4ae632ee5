use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::helpers::app::spawn_app;

#[tokio::test]
async fn presigning_without_storage_configuration_fails() {
    let app = spawn_app().await;

    let (status, body) = app.get("/image/1700000000_portrait.png").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["message"],
        "Missing AWS configuration in environment variables"
    );

    let (status, _) = app.get("/video/presigned-url/clips%2Fa.mp4").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn upload_without_an_image_field_is_a_validation_error() {
    let app = spawn_app().await;

    let boundary = "ROLLCALLBOUNDARY";
    let multipart_body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{boundary}--\r\n"
    );

    let request = Request::builder()
        .method("POST")
        .uri("/image")
        .header(header::AUTHORIZATION, format!("Bearer {}", app.token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(multipart_body))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No image file provided");
}
