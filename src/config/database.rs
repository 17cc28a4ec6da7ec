//! Database configuration module.
//!
//! Handles `SQLite` connection setup and table creation using `SeaORM`. The
//! connection string comes from the `DATABASE_URL` environment variable with
//! a local-file fallback. Table creation uses `SeaORM`'s
//! `Schema::create_table_from_entity` so the database schema always matches
//! the entity definitions without hand-written SQL.

use crate::entities::Wallet;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///wallets.db";

/// Resolves the connection string from an optional environment value.
///
/// Kept separate from the environment read so the fallback rule is testable
/// without mutating process state: `Some(value)` is returned verbatim, `None`
/// yields [`DEFAULT_DATABASE_URL`].
#[must_use]
pub fn resolve_database_url(env_value: Option<String>) -> String {
    env_value.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to a default local `SQLite` file if unset.
#[must_use]
pub fn get_database_url() -> String {
    resolve_database_url(std::env::var("DATABASE_URL").ok())
}

/// Opens a connection to the database and ensures all tables exist.
///
/// A malformed URL or unreachable file surfaces here as a database error;
/// no validation happens earlier.
#[instrument]
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at: {}", database_url);
    let db = Database::connect(database_url).await?;

    info!("Database connection opened. Ensuring tables are created...");
    create_tables(&db).await?;

    Ok(db)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Uses `SeaORM`'s schema generation so the `wallets` table matches the
/// `Wallet` entity struct.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let wallet_table = schema.create_table_from_entity(Wallet);
    db.execute(builder.build(&wallet_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Wallet, wallet::Model as WalletModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[test]
    fn test_default_url_when_env_unset() {
        assert_eq!(resolve_database_url(None), "sqlite:///wallets.db");
    }

    #[test]
    fn test_env_url_used_verbatim() {
        let url = "postgres://example.invalid/wallets".to_string();
        assert_eq!(resolve_database_url(Some(url.clone())), url);
    }

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        // In-memory database to avoid touching any on-disk state
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Table exists if we can query it
        let _: Vec<WalletModel> = Wallet::find().limit(1).all(&db).await?;
        Ok(())
    }
}
