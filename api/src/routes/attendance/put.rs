use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use db::models::attendance_record::{self, is_valid_status};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::services::error::ServiceError;

/// Review fields of an attendance record. Absent fields stay unchanged; an
/// empty `status` clears the record back to pending.
#[derive(Debug, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub status: Option<String>,
    pub flagged: Option<bool>,
    pub fr_identified_id: Option<String>,
    pub video_key: Option<String>,
}

/// PUT /attendance/{id}
pub async fn update_attendance_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAttendanceRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    if let Some(status) = req.status.as_deref() {
        if !is_valid_status(Some(status)) {
            return Err(ServiceError::Validation(format!(
                "Invalid status value: '{status}'"
            )));
        }
    }

    let existing = attendance_record::Entity::find_by_id(id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Attendance record", &id))?;

    let mut active: attendance_record::ActiveModel = existing.into();
    if let Some(status) = req.status {
        // "" reads as pending; normalize it to NULL in storage.
        active.status = Set(if status.is_empty() { None } else { Some(status) });
    }
    if let Some(flagged) = req.flagged {
        active.flagged = Set(flagged);
    }
    if let Some(fr_identified_id) = req.fr_identified_id {
        active.fr_identified_id = Set(Some(fr_identified_id));
    }
    if let Some(video_key) = req.video_key {
        active.video_key = Set(Some(video_key));
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(state.db()).await?;
    Ok(Json(ApiResponse::success(
        updated,
        "Attendance record updated",
    )))
}
