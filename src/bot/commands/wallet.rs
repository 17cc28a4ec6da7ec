//! Wallet Discord commands.
//!
//! Commands here go through [`crate::core::wallet`] so the chat surface and
//! the HTTP surface share one access contract.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::bot::Context;
    use crate::core::wallet;
    use crate::errors::Result;

    /// Shows your wallet, creating it on your first interaction.
    #[poise::command(slash_command, prefix_command)]
    pub async fn wallet(ctx: Context<'_>) -> Result<()> {
        let user_id = ctx.author().id.to_string();
        let db = &ctx.data().database;

        let record = wallet::get_or_create_wallet(db, &user_id).await?;

        ctx.say(format!(
            "💰 Wallet #{} is registered to <@{}>.",
            record.id, record.user_id
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
