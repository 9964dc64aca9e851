use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use opora::cli::{Cli, Commands};
use opora::core::{config, init_logger};
use opora::storage::ConfigStore;
use opora::telegram::{create_bot, schema, setup_bot_commands, ChatStateStore, HandlerDeps};

/// Main entry point for the support bot
///
/// # Errors
/// Returns an error if initialization fails (logging, config store, bot
/// creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env before any config is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE)?;

    let cli = Cli::parse_args();
    match cli.command {
        Some(Commands::Run { data_file }) => run_bot(data_file).await,
        None => {
            // No command specified - default to running the bot
            run_bot(None).await
        }
    }
}

/// Run the Telegram bot in long-polling mode
async fn run_bot(data_file: Option<String>) -> Result<()> {
    let data_file = data_file.unwrap_or_else(|| config::DATA_FILE.clone());
    let store = Arc::new(ConfigStore::new(data_file));

    let token = store.bot_token();
    if token.is_empty() {
        anyhow::bail!(
            "bot_token is not set in {}; fill it in and restart",
            store.path().display()
        );
    }

    let bot = create_bot(&token)?;

    let me = bot.get_me().await?;
    log::info!("Bot username: {:?}, Bot ID: {}", me.username, me.id);

    setup_bot_commands(&bot).await?;

    if store.support_chat() == 0 {
        log::warn!("Support chat is not configured yet; run /setchat <password> in the target group");
    }

    let states = Arc::new(ChatStateStore::new());
    let handler = schema(HandlerDeps::new(Arc::clone(&store), Arc::clone(&states)));

    log::info!("Starting bot in long polling mode");

    // Polling listener that drops pending updates on start
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
