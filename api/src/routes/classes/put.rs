use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use db::models::class;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use util::state::AppState;

use super::common::UpdateClassRequest;
use crate::response::ApiResponse;
use crate::services::error::ServiceError;

/// PUT /class/{id}
///
/// Partial update; only the provided fields change.
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClassRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let existing = class::Entity::find_by_id(id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Class", &id))?;

    let mut active: class::ActiveModel = existing.into();
    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(room_number) = req.room_number {
        active.room_number = Set(room_number);
    }
    if let Some(start_time) = req.start_time {
        active.start_time = Set(start_time);
    }
    if let Some(end_time) = req.end_time {
        active.end_time = Set(end_time);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(state.db()).await?;
    Ok(Json(ApiResponse::success(updated, "Class updated")))
}
