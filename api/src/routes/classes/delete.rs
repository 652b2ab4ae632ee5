use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::{class, class_student};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use util::state::AppState;

use crate::services::error::ServiceError;

/// DELETE /class/{id}
///
/// Deletes only the class row. Sessions and assignments referencing it are
/// left untouched; there is no cascade.
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = class::Entity::delete_by_id(id.clone())
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::not_found("Class", &id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /class/{class_id}/student/{student_id}
pub async fn remove_class_student(
    State(state): State<AppState>,
    Path((class_id, student_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = class_student::Entity::delete_many()
        .filter(class_student::Column::ClassId.eq(class_id.clone()))
        .filter(class_student::Column::StudentId.eq(student_id.clone()))
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound(format!(
            "Student '{student_id}' is not assigned to class '{class_id}'"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
