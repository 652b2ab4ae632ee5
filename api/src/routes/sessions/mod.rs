use axum::{
    Router,
    routing::{delete, get, post},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use self::delete::{delete_session, delete_session_attendance};
use self::get::{get_session, get_session_attendance, get_session_students};
use self::post::{add_attendance, create_session};
use self::put::update_session;

pub fn sessions_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(create_session))
        .route(
            "/session/{id}",
            get(get_session).put(update_session).delete(delete_session),
        )
        .route("/session/{session_id}/students", get(get_session_students))
        .route(
            "/session/{session_id}/attendance",
            get(get_session_attendance).post(add_attendance),
        )
        .route(
            "/session/{session_id}/attendance/{attendance_id}",
            delete(delete_session_attendance),
        )
}
