use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;

use self::delete::delete_log;
use self::get::{get_log, list_logs};
use self::post::create_log;

pub fn logs_routes() -> Router<AppState> {
    Router::new()
        .route("/log", post(create_log))
        .route("/logs", get(list_logs))
        .route("/log/{id}", get(get_log).delete(delete_log))
}
