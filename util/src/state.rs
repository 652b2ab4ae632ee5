//! Application state container shared across Axum route handlers and services.
//!
//! Holds the database connection; wrapped in clones rather than an `Arc` since
//! `DatabaseConnection` is itself cheaply cloneable.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
