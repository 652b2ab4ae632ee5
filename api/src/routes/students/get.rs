use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use db::models::student;
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{PageParams, paginate};
use crate::services::error::ServiceError;

/// GET /student/{id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let student = student::Entity::find_by_id(id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Student", &id))?;

    Ok(Json(ApiResponse::success(student, "Student retrieved")))
}

/// GET /students?page&size
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let (page, size) = params.clamp();
    let response = paginate(
        state.db(),
        student::Entity::find()
            .order_by_asc(student::Column::CreatedAt)
            .order_by_asc(student::Column::Id),
        page,
        size,
    )
    .await?;

    Ok(Json(ApiResponse::success(response, "Students retrieved")))
}
