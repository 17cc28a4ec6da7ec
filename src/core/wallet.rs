//! Wallet access contract - all database operations on wallet rows.
//!
//! Wallets are created on a user's first interaction and addressed either by
//! surrogate id or by the external user identifier. The schema does not
//! enforce uniqueness on `user_id`, so user lookups resolve to the oldest row
//! for that user; [`get_or_create_wallet`] keeps the mapping effectively
//! one-to-one for callers that always go through it.

use crate::{
    entities::{Wallet, wallet},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Inserts a new wallet row for the given user. The id is assigned by the
/// store and returned in the resulting model.
pub async fn create_wallet(db: &DatabaseConnection, user_id: &str) -> Result<wallet::Model> {
    let model = wallet::ActiveModel {
        user_id: Set(user_id.to_string()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves a wallet by its unique id, or `None` if no such row exists.
pub async fn get_wallet(db: &DatabaseConnection, id: i32) -> Result<Option<wallet::Model>> {
    Wallet::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Retrieves the wallet for an external user identifier.
///
/// Returns the oldest matching row when more than one exists.
pub async fn get_wallet_by_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Option<wallet::Model>> {
    Wallet::find()
        .filter(wallet::Column::UserId.eq(user_id))
        .order_by_asc(wallet::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Fetches the wallet for a user, creating it on first interaction.
///
/// Idempotent per user: repeated calls return the same row.
pub async fn get_or_create_wallet(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<wallet::Model> {
    if let Some(existing) = get_wallet_by_user(db, user_id).await? {
        return Ok(existing);
    }

    create_wallet(db, user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_wallet_assigns_id() -> Result<()> {
        let db = setup_test_db().await?;

        let wallet = create_wallet(&db, "1234567890").await?;
        assert_eq!(wallet.user_id, "1234567890");
        assert!(wallet.id > 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_wallet_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_wallet(&db, "user-a").await?;

        let found = get_wallet(&db, created.id).await?;
        assert_eq!(found, Some(created));

        let missing = get_wallet(&db, 999_999).await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_wallet_by_user() -> Result<()> {
        let db = setup_test_db().await?;
        create_wallet(&db, "user-a").await?;
        create_wallet(&db, "user-b").await?;

        let found = get_wallet_by_user(&db, "user-b").await?;
        assert_eq!(found.map(|w| w.user_id), Some("user-b".to_string()));

        let missing = get_wallet_by_user(&db, "user-c").await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_wallet_by_user_prefers_oldest_row() -> Result<()> {
        let db = setup_test_db().await?;
        let first = create_wallet(&db, "dup-user").await?;
        let second = create_wallet(&db, "dup-user").await?;
        assert!(second.id > first.id);

        let found = get_wallet_by_user(&db, "dup-user").await?;
        assert_eq!(found.map(|w| w.id), Some(first.id));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        let first = get_or_create_wallet(&db, "9876543210").await?;
        let second = get_or_create_wallet(&db, "9876543210").await?;
        assert_eq!(first.id, second.id);

        let all = Wallet::find().all(&db).await?;
        assert_eq!(all.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_primary_key_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_wallet(&db, "user-a").await?;

        // Explicitly reusing an existing id must violate the primary key
        let duplicate = wallet::ActiveModel {
            id: Set(created.id),
            user_id: Set("user-b".to_string()),
        };
        assert!(duplicate.insert(&db).await.is_err());
        Ok(())
    }
}
