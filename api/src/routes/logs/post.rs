use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::log;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::response::ApiResponse;
use crate::services::error::ServiceError;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLogRequest {
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "Action is required"))]
    pub action: String,
    #[validate(length(min = 1, message = "Entity type is required"))]
    pub entity_type: String,
    #[validate(length(min = 1, message = "Entity id is required"))]
    pub entity_id: String,
}

/// POST /log
///
/// Appends an audit entry; id and timestamp are assigned server-side.
pub async fn create_log(
    State(state): State<AppState>,
    Json(req): Json<CreateLogRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

    let created = log::Model::create(
        state.db(),
        &req.user_id,
        &req.action,
        &req.entity_type,
        &req.entity_id,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Log entry created")),
    ))
}
