//! Telegram bot integration: flows, relay, and the dispatcher schema

pub mod admin;
pub mod bot;
pub mod handlers;
pub mod menu;
pub mod relay;
pub mod state;
pub mod support;
pub mod texts;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use state::{ChatState, ChatStateStore};
