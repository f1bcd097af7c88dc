use axum::{Router, routing::get};

pub mod bookmarks;
pub mod config;
pub mod db;
pub mod error;
pub mod handler;

/// Builds the full service router. `main` layers CORS on top of this.
pub fn router(state: handler::AppState) -> Router {
    Router::new()
        .route("/health", get(handler::healthcheck))
        .nest("/api", bookmarks::routes())
        .with_state(state)
}
