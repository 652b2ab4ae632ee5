use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::student;
use util::state::AppState;
use validator::Validate;

use super::common::CreateStudentRequest;
use crate::response::ApiResponse;
use crate::services::error::ServiceError;

/// POST /student
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

    let created =
        student::Model::create(state.db(), &req.name, req.image.as_deref().unwrap_or(""))
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Student created")),
    ))
}
