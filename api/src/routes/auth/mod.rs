use axum::{Router, routing::post};
use util::state::AppState;

mod post;

pub use post::{login, register};

/// Public authentication endpoints.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}
