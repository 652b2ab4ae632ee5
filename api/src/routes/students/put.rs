use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use db::models::student;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use util::state::AppState;

use super::common::UpdateStudentRequest;
use crate::response::ApiResponse;
use crate::services::error::ServiceError;

/// PUT /student/{id}
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let existing = student::Entity::find_by_id(id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Student", &id))?;

    let mut active: student::ActiveModel = existing.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(image) = req.image {
        active.image = Set(image);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(state.db()).await?;
    Ok(Json(ApiResponse::success(updated, "Student updated")))
}
