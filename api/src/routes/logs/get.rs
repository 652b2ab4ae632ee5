use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use db::models::log;
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{PageParams, paginate};
use crate::services::error::ServiceError;

/// GET /log/{id}
pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let entry = log::Entity::find_by_id(id.clone())
        .one(state.db())
        .await?
        .ok_or_else(|| ServiceError::not_found("Log entry", &id))?;

    Ok(Json(ApiResponse::success(entry, "Log entry retrieved")))
}

/// GET /logs?page&size
pub async fn list_logs(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let (page, size) = params.clamp();
    let response = paginate(
        state.db(),
        log::Entity::find()
            .order_by_asc(log::Column::Timestamp)
            .order_by_asc(log::Column::Id),
        page,
        size,
    )
    .await?;

    Ok(Json(ApiResponse::success(response, "Logs retrieved")))
}
