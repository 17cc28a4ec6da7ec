//! Wallet entity - Associates a chat-platform user with a persisted record.
//!
//! The schema is deliberately minimal: a system-assigned surrogate key and the
//! external user identifier. `user_id` carries no uniqueness constraint;
//! lookups that expect one row per user go through [`crate::core::wallet`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wallet database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    /// Unique identifier for the wallet, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord user ID this wallet belongs to
    pub user_id: String,
}

/// `Wallet` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
