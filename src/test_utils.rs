//! Shared test utilities.
//!
//! Helpers for setting up in-memory test databases and seeding wallet rows.

use crate::{core::wallet, entities, errors::Result};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a wallet row for the given user id.
pub async fn create_test_wallet(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entities::wallet::Model> {
    wallet::create_wallet(db, user_id).await
}
