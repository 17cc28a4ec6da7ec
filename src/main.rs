//! Binary entrypoint - wires configuration, storage, bot, and web server.

use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wallet_bot::errors::{Error, Result};
use wallet_bot::{bot, config, context::AppContext, web};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Resolve configuration from the environment
    let database_url = config::database::get_database_url();
    let bind_addr = config::server::get_bind_addr();
    info!("Using database at {}", database_url);

    // 4. Initialize database and ensure tables exist
    let db = config::database::init_db(&database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Build the shared application context
    let app_context = AppContext::new(db);

    // 6. Run bot and web server as cooperating long-lived tasks.
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in config.
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    tokio::try_join!(
        bot::run_bot(token, app_context.clone()),
        web::serve(&bind_addr, app_context),
    )?;

    Ok(())
}
