//! Read handlers for classes, schedules, and class assignments.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use db::models::{class, class_professor, class_student, session};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{PageParams, paginate};
use crate::services::error::ServiceError;

/// GET /class/{id}
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let class = class::Entity::find_by_id(id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Class", &id))?;

    Ok(Json(ApiResponse::success(class, "Class retrieved")))
}

/// GET /classes?page&size
pub async fn list_classes(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let (page, size) = params.clamp();
    let response = paginate(
        state.db(),
        class::Entity::find()
            .order_by_asc(class::Column::CreatedAt)
            .order_by_asc(class::Column::Id),
        page,
        size,
    )
    .await?;

    Ok(Json(ApiResponse::success(response, "Classes retrieved")))
}

/// GET /class/{class_id}/sessions
pub async fn get_class_sessions(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    ensure_class_exists(&state, &class_id).await?;

    let sessions = session::Entity::find()
        .filter(session::Column::ClassId.eq(class_id))
        .order_by_asc(session::Column::StartTime)
        .all(state.db())
        .await?;

    Ok(Json(ApiResponse::success(sessions, "Sessions retrieved")))
}

/// GET /schedule/{room_number}
///
/// Lists the classes scheduled in a room; an unknown room simply yields an
/// empty list.
pub async fn get_room_schedule(
    State(state): State<AppState>,
    Path(room_number): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let classes = class::Entity::find()
        .filter(class::Column::RoomNumber.eq(room_number))
        .order_by_asc(class::Column::StartTime)
        .all(state.db())
        .await?;

    Ok(Json(ApiResponse::success(classes, "Schedule retrieved")))
}

/// GET /class/{class_id}/students
pub async fn get_class_students(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    ensure_class_exists(&state, &class_id).await?;

    let student_ids: Vec<String> = class_student::Entity::find()
        .filter(class_student::Column::ClassId.eq(class_id))
        .all(state.db())
        .await?
        .into_iter()
        .map(|row| row.student_id)
        .collect();

    Ok(Json(ApiResponse::success(student_ids, "Students retrieved")))
}

/// GET /class/{class_id}/professors
pub async fn get_class_professors(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    ensure_class_exists(&state, &class_id).await?;

    let usernames: Vec<String> = class_professor::Entity::find()
        .filter(class_professor::Column::ClassId.eq(class_id))
        .all(state.db())
        .await?
        .into_iter()
        .map(|row| row.username)
        .collect();

    Ok(Json(ApiResponse::success(usernames, "Professors retrieved")))
}

pub(super) async fn ensure_class_exists(
    state: &AppState,
    class_id: &str,
) -> Result<class::Model, ServiceError> {
    class::Entity::find_by_id(class_id.to_owned())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Class", class_id))
}
