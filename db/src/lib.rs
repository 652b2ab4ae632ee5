pub mod models;

use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use util::config;

/// Connects to the embedded database configured through `DATABASE_PATH`.
///
/// Accepts either a full DSN or a plain SQLite file path; intermediate
/// directories are created for file paths since SQLite will not.
pub async fn connect() -> DatabaseConnection {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url
    } else {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}
