use axum::{Router, routing::get, routing::post};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use self::delete::delete_student;
use self::get::{get_student, list_students};
use self::post::create_student;
use self::put::update_student;

pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/student", post(create_student))
        .route("/students", get(list_students))
        .route(
            "/student/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
