use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use db::models::session;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use util::state::AppState;

use super::common::UpdateSessionRequest;
use crate::response::ApiResponse;
use crate::services::error::ServiceError;

/// PUT /session/{id}
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let existing = session::Entity::find_by_id(id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Session", &id))?;

    let mut active: session::ActiveModel = existing.into();
    if let Some(start_time) = req.start_time {
        active.start_time = Set(start_time);
    }
    if let Some(end_time) = req.end_time {
        active.end_time = Set(end_time);
    }
    if let Some(class_id) = req.class_id {
        active.class_id = Set(class_id);
    }
    if let Some(professor_id) = req.professor_id {
        active.professor_id = Set(professor_id);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(state.db()).await?;
    Ok(Json(ApiResponse::success(updated, "Session updated")))
}
