use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::log;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::services::error::ServiceError;

/// DELETE /log/{id}
pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let result = log::Entity::delete_by_id(id.clone()).exec(state.db()).await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::not_found("Log entry", &id));
    }
    Ok(StatusCode::NO_CONTENT)
}
