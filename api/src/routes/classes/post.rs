//! Creation and assignment handlers for classes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::{class, class_professor, class_student, student, user};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use util::state::AppState;
use validator::Validate;

use super::common::{AssignStudentsRequest, CreateClassRequest, ProfessorAssignmentRequest};
use super::get::ensure_class_exists;
use crate::response::{ApiResponse, Empty};
use crate::services::error::ServiceError;

/// POST /class
pub async fn create_class(
    State(state): State<AppState>,
    Json(req): Json<CreateClassRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

    let created = class::Model::create(
        state.db(),
        &req.name,
        &req.room_number,
        &req.start_time,
        &req.end_time,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Class created")),
    ))
}

/// POST /class/{class_id}/students
///
/// Assigns students to a class, skipping pairs that already exist. The loop
/// stops at the first unknown student id; earlier assignments stay in place.
pub async fn assign_students(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    Json(req): Json<AssignStudentsRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    ensure_class_exists(&state, &class_id).await?;

    for student_id in &req.student_ids {
        student::Entity::find_by_id(student_id.clone())
            .one(state.db())
            .await?
            .ok_or_else(|| ServiceError::not_found("Student", student_id))?;

        let exists = class_student::Entity::find_by_id((student_id.clone(), class_id.clone()))
            .one(state.db())
            .await?
            .is_some();
        if exists {
            continue;
        }

        class_student::ActiveModel {
            student_id: Set(student_id.clone()),
            class_id: Set(class_id.clone()),
        }
        .insert(state.db())
        .await?;
    }

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::<Empty>::success(
            Empty,
            "Students assigned to class",
        )),
    ))
}

/// POST /class/assign
pub async fn assign_professor(
    State(state): State<AppState>,
    Json(req): Json<ProfessorAssignmentRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

    user::Model::find_by_username(state.db(), &req.username)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("User '{}' not found", req.username))
        })?;
    ensure_class_exists(&state, &req.class_id).await?;

    let exists =
        class_professor::Entity::find_by_id((req.username.clone(), req.class_id.clone()))
            .one(state.db())
            .await?
            .is_some();
    if exists {
        return Err(ServiceError::Conflict(
            "Professor is already assigned to this class".into(),
        ));
    }

    class_professor::ActiveModel {
        username: Set(req.username),
        class_id: Set(req.class_id),
    }
    .insert(state.db())
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::<Empty>::success(
            Empty,
            "Professor assigned to class",
        )),
    ))
}

/// POST /class/unassign
///
/// Removing an assignment that does not exist is not an error.
pub async fn unassign_professor(
    State(state): State<AppState>,
    Json(req): Json<ProfessorAssignmentRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

    class_professor::Entity::delete_many()
        .filter(class_professor::Column::Username.eq(req.username))
        .filter(class_professor::Column::ClassId.eq(req.class_id))
        .exec(state.db())
        .await?;

    Ok(Json(ApiResponse::<Empty>::success(
        Empty,
        "Professor unassigned from class",
    )))
}
