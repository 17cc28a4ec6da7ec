//! Unified error type for the crate.
//!
//! All fallible operations return [`Result`], which wraps [`Error`]. Database,
//! I/O, and environment errors convert automatically via `#[from]`; serenity
//! errors are boxed because they are large.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or query failure.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure, typically binding the HTTP listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable.
    #[error("environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/Poise framework error.
    #[error("Discord client error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::Discord(Box::new(value))
    }
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
