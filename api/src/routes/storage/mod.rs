use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod get;
pub mod post;

use self::get::{get_image_url, get_video_url};
use self::post::upload_image;

pub fn storage_routes() -> Router<AppState> {
    Router::new()
        .route("/image", post(upload_image))
        .route("/image/{image_key}", get(get_image_url))
        .route("/video/presigned-url/{video_key}", get(get_video_url))
}
