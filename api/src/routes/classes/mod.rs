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

use self::delete::{delete_class, remove_class_student};
use self::get::{
    get_class, get_class_professors, get_class_sessions, get_class_students, get_room_schedule,
    list_classes,
};
use self::post::{assign_professor, assign_students, create_class, unassign_professor};
use self::put::update_class;

pub fn classes_routes() -> Router<AppState> {
    Router::new()
        .route("/class", post(create_class))
        .route("/classes", get(list_classes))
        .route("/class/assign", post(assign_professor))
        .route("/class/unassign", post(unassign_professor))
        .route(
            "/class/{id}",
            get(get_class).put(update_class).delete(delete_class),
        )
        .route("/class/{class_id}/sessions", get(get_class_sessions))
        .route(
            "/class/{class_id}/students",
            get(get_class_students).post(assign_students),
        )
        .route(
            "/class/{class_id}/student/{student_id}",
            delete(remove_class_student),
        )
        .route("/class/{class_id}/professors", get(get_class_professors))
        .route("/schedule/{room_number}", get(get_room_schedule))
}
