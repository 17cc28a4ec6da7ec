/// Database configuration and connection management
pub mod database;

/// HTTP server bind-address configuration
pub mod server;
