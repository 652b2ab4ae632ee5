use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use self::get::get_dashboard;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/{class_id}", get(get_dashboard))
}
