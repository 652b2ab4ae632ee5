use axum::{Json, extract::Path, response::IntoResponse};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::services::error::ServiceError;
use crate::services::object_storage::ObjectStorage;

#[derive(Serialize)]
pub struct PresignedUrlResponse {
    pub url: String,
}

/// GET /image/{image_key}
pub async fn get_image_url(
    Path(image_key): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    presign(&image_key).await
}

/// GET /video/presigned-url/{video_key}
pub async fn get_video_url(
    Path(video_key): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    presign(&video_key).await
}

async fn presign(key: &str) -> Result<Json<ApiResponse<PresignedUrlResponse>>, ServiceError> {
    let storage = ObjectStorage::from_config()?;
    let url = storage.presigned_url(key).await?;

    Ok(Json(ApiResponse::success(
        PresignedUrlResponse { url },
        "Presigned URL generated",
    )))
}
