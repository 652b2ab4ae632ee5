use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{attendance_record, class, session, student};
use sea_orm::EntityTrait;
use util::state::AppState;

use super::common::{AddAttendanceRequest, CreateSessionRequest};
use crate::response::ApiResponse;
use crate::services::error::ServiceError;

/// POST /session
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let (Some(start_time), Some(end_time), Some(class_id), Some(professor_id)) =
        (req.start_time, req.end_time, req.class_id, req.professor_id)
    else {
        return Err(ServiceError::Validation("All fields are required".into()));
    };

    class::Entity::find_by_id(class_id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Class", &class_id))?;

    let created =
        session::Model::create(state.db(), start_time, end_time, &class_id, &professor_id)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Session created")),
    ))
}

/// POST /session/{session_id}/attendance
///
/// Records a check-in. Both the session and the claimed student must exist
/// before anything is inserted.
pub async fn add_attendance(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AddAttendanceRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let (Some(student_id), Some(check_in)) = (req.student_id, req.check_in) else {
        return Err(ServiceError::Validation(
            "student_id and check_in are required".into(),
        ));
    };

    super::get::ensure_session_exists(&state, &session_id).await?;
    student::Entity::find_by_id(student_id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Student", &student_id))?;

    let created = attendance_record::Model::create(
        state.db(),
        &student_id,
        &session_id,
        check_in,
        req.portrait_url.as_deref().unwrap_or(""),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Attendance recorded")),
    ))
}
