//! Bookmarks Module
//!
//! A self-contained library for persisting browser bookmarks: a title, a URL,
//! and a free-form category label per record. Exposes typed CRUD operations
//! over a libsql connection plus ready-to-use HTTP handlers and routes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use linkstash::bookmarks;
//!
//! // Get the migrations to run
//! for (name, sql) in bookmarks::migrations() {
//!     // Run migration...
//! }
//!
//! // Mount the routes
//! let app = Router::new()
//!     .nest("/api", bookmarks::routes())
//!     .with_state(app_state);
//!
//! // Use the library directly
//! let store = bookmarks::Bookmarks::new(connection);
//! let bookmark = store.create(input).await?;
//! ```

mod handler;
mod lib;
mod routes;

// Re-export the core library types and functions
pub use lib::*;

// Re-export the routes function
pub use routes::routes;

/// Returns the migrations for the bookmarks module.
///
/// These should be run during application startup to ensure the database
/// schema is up to date.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "bookmarks_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
