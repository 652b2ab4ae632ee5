//! Registration and login handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::user;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use crate::services::error::ServiceError;

#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
    pub user: user::Model,
}

/// POST /register
///
/// Creates a regular account. 409 when the username is taken, 400 when
/// either field is empty.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

    if user::Model::find_by_username(state.db(), &req.username)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict("Username already taken".into()));
    }

    let created = user::Model::create(
        state.db(),
        &req.username,
        &req.password,
        user::Model::TYPE_USER,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "User registered successfully")),
    ))
}

/// POST /login
///
/// Issues a bearer token. The failure message never reveals whether the
/// username or the password was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    req.validate()
        .map_err(|e| ServiceError::Validation(format_validation_errors(&e)))?;

    let user = user::Model::find_by_username(state.db(), &req.username)
        .await?
        .ok_or(ServiceError::InvalidCredentials)?;

    if !user.verify_password(&req.password) {
        return Err(ServiceError::InvalidCredentials);
    }

    let (token, expires_at) = generate_jwt(&user.id, &user.user_type);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            LoginResponse {
                token,
                expires_at,
                user,
            },
            "Login successful",
        )),
    ))
}
