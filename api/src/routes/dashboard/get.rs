use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::services::dashboard::build_dashboard_data;
use crate::services::error::ServiceError;

/// GET /dashboard/{class_id}
///
/// All-or-nothing aggregation: any missing referenced entity fails the
/// whole request with 404.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let data = build_dashboard_data(state.db(), &class_id).await?;
    Ok(Json(ApiResponse::success(data, "Dashboard retrieved")))
}
