use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::{session, session_student};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::services::dashboard::attendance_for_sessions;
use crate::services::error::ServiceError;

/// GET /session/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let session = ensure_session_exists(&state, &id).await?;
    Ok(Json(ApiResponse::success(session, "Session retrieved")))
}

/// GET /session/{session_id}/students
pub async fn get_session_students(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    ensure_session_exists(&state, &session_id).await?;

    let student_ids: Vec<String> = session_student::Entity::find()
        .filter(session_student::Column::SessionId.eq(session_id))
        .all(state.db())
        .await?
        .into_iter()
        .map(|row| row.student_id)
        .collect();

    Ok(Json(ApiResponse::success(student_ids, "Students retrieved")))
}

/// GET /session/{session_id}/attendance
///
/// Returns attendance grouped by session id; a session with no records
/// yields an empty map.
pub async fn get_session_attendance(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    ensure_session_exists(&state, &session_id).await?;

    let grouped = attendance_for_sessions(state.db(), &[session_id]).await?;
    Ok(Json(ApiResponse::success(grouped, "Attendance retrieved")))
}

pub(super) async fn ensure_session_exists(
    state: &AppState,
    session_id: &str,
) -> Result<session::Model, ServiceError> {
    session::Entity::find_by_id(session_id.to_owned())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Session", session_id))
}
