use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{attendance_record, session};
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::services::error::ServiceError;

/// DELETE /session/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = session::Entity::delete_by_id(id.clone())
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::not_found("Session", &id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /session/{session_id}/attendance/{attendance_id}
///
/// The record must belong to the session named in the path.
pub async fn delete_session_attendance(
    State(state): State<AppState>,
    Path((session_id, attendance_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ServiceError> {
    let record = attendance_record::Entity::find_by_id(attendance_id.clone())
        .one(state.db())
        .await?
        .filter(|r| r.session_id == session_id)
        .ok_or_else(|| ServiceError::not_found("Attendance record", &attendance_id))?;

    attendance_record::Entity::delete_by_id(record.id)
        .exec(state.db())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
