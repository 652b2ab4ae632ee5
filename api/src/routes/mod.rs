//! Route assembly: a public router for health and auth, and a guarded
//! router for everything else.

pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod health;
pub mod logs;
pub mod sessions;
pub mod storage;
pub mod students;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;

/// Builds the complete application router. Protected routes verify the
/// bearer token and that its user still exists before dispatch.
pub fn routes(app_state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health::health))
        .merge(auth::auth_routes());

    let protected = Router::new()
        .merge(classes::classes_routes())
        .merge(students::students_routes())
        .merge(sessions::sessions_routes())
        .merge(attendance::attendance_routes())
        .merge(logs::logs_routes())
        .merge(dashboard::dashboard_routes())
        .merge(storage::storage_routes())
        .route_layer(from_fn_with_state(app_state, allow_authenticated));

    public.merge(protected)
}
