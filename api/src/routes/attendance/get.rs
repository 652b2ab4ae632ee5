use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use db::models::attendance_record;
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{PageParams, paginate};
use crate::services::error::ServiceError;

/// GET /attendance?page&size
///
/// Pages over every record in stable creation order; this is the feed the
/// monitoring views poll.
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let (page, size) = params.clamp();
    let response = paginate(
        state.db(),
        attendance_record::Entity::find()
            .order_by_asc(attendance_record::Column::CreatedAt)
            .order_by_asc(attendance_record::Column::Id),
        page,
        size,
    )
    .await?;

    Ok(Json(ApiResponse::success(response, "Attendance retrieved")))
}

/// GET /attendance/{id}
pub async fn get_attendance_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let record = attendance_record::Entity::find_by_id(id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Attendance record", &id))?;

    Ok(Json(ApiResponse::success(record, "Attendance record retrieved")))
}
