use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::Entity as UserEntity;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, Empty};

/// Helper to extract and validate the user from request parts, then insert
/// the claims back into the request extensions.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Authentication required")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Guard to ensure the request carries a valid token for a user that still
/// exists. A structurally valid token whose subject has since been deleted
/// yields no identity.
pub async fn allow_authenticated(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    let known = UserEntity::find_by_id(user.0.sub.clone())
        .one(state.db())
        .await
        .ok()
        .flatten()
        .is_some();

    if !known {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid or expired token")),
        ));
    }

    Ok(next.run(req).await)
}
