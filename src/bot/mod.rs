//! Bot layer - Discord-specific interface and command handlers.
//!
//! This module owns the connection to Discord: gateway intents, the poise
//! framework setup, command registration, and the central error handler.
//! Commands receive the shared [`AppContext`] as poise user data.

/// Discord command implementations (wallet, general)
pub mod commands;

use crate::context::AppContext;
use crate::errors;
use poise::serenity_prelude as serenity;
use tracing::{info, instrument};

/// Error type poise uses for all command results.
pub(crate) type Error = errors::Error;
/// Command context carrying the shared [`AppContext`].
pub(crate) type Context<'a> = poise::Context<'a, AppContext, Error>;

async fn on_error(error: poise::FrameworkError<'_, AppContext, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                tracing::error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and runs the bot until the gateway connection ends.
///
/// Registers all slash commands globally and also accepts the same commands
/// with a `/` message prefix, which requires the message-content intent.
#[instrument(skip(token, app_context))]
pub async fn run_bot(token: String, app_context: AppContext) -> errors::Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::wallet(),
                commands::ping(),
                commands::help(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("/".to_string()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(app_context)
            })
        })
        .build();

    // Message-content visibility is required for prefix commands
    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| tracing::error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| tracing::error!("Client error: {:?}", e))?;

    Ok(())
}
