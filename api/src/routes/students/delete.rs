use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class_student, session_student, student};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use util::state::AppState;

use crate::services::error::ServiceError;

/// DELETE /student/{id}
///
/// Also removes the student's class and session assignment rows. Attendance
/// records are kept as historical evidence.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = student::Entity::delete_by_id(id.clone())
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::not_found("Student", &id));
    }

    class_student::Entity::delete_many()
        .filter(class_student::Column::StudentId.eq(id.clone()))
        .exec(state.db())
        .await?;
    session_student::Entity::delete_many()
        .filter(session_student::Column::StudentId.eq(id))
        .exec(state.db())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
