//! HTTP route handlers.
//!
//! Handlers are plain async functions over extractors, so tests call them
//! directly with a test database behind the [`AppContext`].

use crate::context::AppContext;
use crate::core::wallet;
use crate::entities::wallet::Model as WalletModel;
use crate::web::ApiError;
use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Looks up the wallet for a user id. 404 when the user has no wallet yet.
pub async fn get_wallet(
    State(app_context): State<AppContext>,
    Path(user_id): Path<String>,
) -> Result<Json<WalletModel>, ApiError> {
    let record = wallet::get_wallet_by_user(&app_context.database, &user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no wallet for user {user_id}")))?;

    Ok(Json(record))
}

/// Fetches the wallet for a user, creating it on first request.
///
/// Mirrors the chat-side first-interaction lifecycle so both surfaces share
/// the same contract.
pub async fn ensure_wallet(
    State(app_context): State<AppContext>,
    Path(user_id): Path<String>,
) -> Result<Json<WalletModel>, ApiError> {
    let record = wallet::get_or_create_wallet(&app_context.database, &user_id).await?;
    Ok(Json(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use crate::test_utils::{create_test_wallet, setup_test_db};
    use sea_orm::EntityTrait;

    async fn test_context() -> Result<AppContext> {
        Ok(AppContext::new(setup_test_db().await?))
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_get_wallet_missing_returns_not_found() -> Result<()> {
        let ctx = test_context().await?;

        let result = get_wallet(State(ctx), Path("unknown-user".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_wallet_returns_existing_row() -> Result<()> {
        let ctx = test_context().await?;
        let created = create_test_wallet(&ctx.database, "1234567890").await?;

        let found = match get_wallet(State(ctx), Path("1234567890".to_string())).await {
            Ok(Json(found)) => found,
            Err(e) => panic!("expected wallet, got {e:?}"),
        };
        assert_eq!(found, created);
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_wallet_creates_once() -> Result<()> {
        let ctx = test_context().await?;

        let first = ensure_wallet(State(ctx.clone()), Path("9876543210".to_string())).await;
        let second = ensure_wallet(State(ctx.clone()), Path("9876543210".to_string())).await;
        let (Ok(Json(first)), Ok(Json(second))) = (first, second) else {
            panic!("ensure_wallet failed");
        };
        assert_eq!(first.id, second.id);

        let all = crate::entities::Wallet::find().all(&ctx.database).await?;
        assert_eq!(all.len(), 1);
        Ok(())
    }
}
