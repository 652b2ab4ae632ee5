use axum::{Json, extract::Multipart, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::services::error::ServiceError;
use crate::services::object_storage::ObjectStorage;

#[derive(Serialize)]
pub struct UploadResponse {
    pub file_url: String,
}

/// POST /image
///
/// Accepts a multipart body with an `image` field and stores it under a
/// timestamp-prefixed key.
pub async fn upload_image(mut multipart: Multipart) -> Result<impl IntoResponse, ServiceError> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServiceError::Validation(format!("Failed to read image field: {e}")))?;

        upload = Some((file_name, content_type, bytes.to_vec()));
        break;
    }

    let (file_name, content_type, bytes) =
        upload.ok_or_else(|| ServiceError::Validation("No image file provided".into()))?;

    let storage = ObjectStorage::from_config()?;
    let file_url = storage.upload(&file_name, &content_type, bytes).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            UploadResponse { file_url },
            "Image uploaded",
        )),
    ))
}
