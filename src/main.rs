// This is the entry point of the performance log bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (databases)
// - `discord/` = Discord-specific adapters (commands, presence)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and the error hook

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::performance::PerformanceLogService;
use crate::discord::commands::presence;
use crate::discord::{Data, Error};
use crate::infra::performance::SqlitePerformanceLogStore;
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::path::Path;
use std::sync::Arc;

const DEFAULT_DB_PATH: &str = "data/performance.db";
const COMMAND_PREFIX: &str = "!";

/// Settings read from the environment (and `.env`, if present).
struct BotConfig {
    token: String,
    database_path: String,
}

impl BotConfig {
    fn from_env() -> anyhow::Result<Self> {
        let token = std::env::var("DISCORD_TOKEN").context(
            "Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.",
        )?;
        let database_path =
            std::env::var("PERFORMANCE_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

        Ok(Self {
            token,
            database_path,
        })
    }
}

/// Framework-level error hook. Command failures that reach here are storage
/// or Discord errors; argument errors fall through to poise's default replies.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(
                command = %ctx.command().qualified_name,
                "Command failed: {}",
                error
            );
            if let Err(e) = ctx.say(discord::failure_reply(&error)).await {
                tracing::error!("Failed to send error reply: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let config = BotConfig::from_env()?;

    // Keep the runtime database in its own folder so the repo root stays tidy.
    if let Some(parent) = Path::new(&config.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let performance_store = SqlitePerformanceLogStore::open(&config.database_path)
        .await
        .context("Failed to initialize performance log database")?;
    let performance_service = Arc::new(PerformanceLogService::new(performance_store));

    tracing::info!(path = %config.database_path, "Performance log database ready");

    let data = Data {
        performance: Arc::clone(&performance_service),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read prefix commands
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                discord::commands::general::ping(),
                discord::commands::general::hello(),
                discord::commands::general::help(),
                discord::performance::commands::logar(),
                discord::performance::commands::ver_logs(),
                discord::performance::commands::apagar_log(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.into()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, _framework| {
            Box::pin(async move {
                tracing::info!(bot = %ready.user.name, "Bot is online and ready");
                presence::on_ready(ctx);
                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
