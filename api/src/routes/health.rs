use axum::{Json, response::IntoResponse};
use serde::Serialize;
use util::config;

use crate::response::ApiResponse;

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::success(
        HealthResponse {
            service: config::project_name(),
            status: "ok",
        },
        "Service is healthy",
    ))
}
