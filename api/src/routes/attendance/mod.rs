use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;
pub mod put;

use self::get::{get_attendance_record, list_attendance};
use self::put::update_attendance_record;

pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/attendance", get(list_attendance))
        .route(
            "/attendance/{id}",
            get(get_attendance_record).put(update_attendance_record),
        )
}
