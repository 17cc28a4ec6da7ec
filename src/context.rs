//! Shared application context.
//!
//! Constructed once at startup and handed to both the Discord bot (as poise
//! user data) and the web server (as axum state). Keeping it explicit avoids
//! module-level singletons; handlers only see what they are given.

use sea_orm::DatabaseConnection;

/// State shared by all bot commands and HTTP handlers.
#[derive(Clone)]
pub struct AppContext {
    /// Database connection for all wallet operations
    pub database: DatabaseConnection,
}

impl AppContext {
    /// Creates a new `AppContext` wrapping the given database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}
