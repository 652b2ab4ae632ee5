//! Domain error type shared by route handlers and services.
//!
//! Failures travel as explicit `Result` values instead of being matched out
//! of exception messages; each variant carries its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::response::{ApiResponse, Empty};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Storage(String),
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound(format!("{entity} with id '{id}' not found"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Config(_) | Self::Storage(_) | Self::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ApiResponse::<Empty>::error(self.to_string()))).into_response()
    }
}
