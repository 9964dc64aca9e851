//! User flow: greeting, instruction delivery, and the support entry point
//!
//! `/start` resets the chat and shows the two-button main menu. Picking
//! "Инструкция" sends whatever is stored (document, text, or both) and
//! schedules a delayed thank-you; picking "Служба поддержки" switches the
//! chat into question-capture mode, which the relay module consumes.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, ReplyParameters};
use teloxide::RequestError;

use crate::core::config;
use crate::telegram::handlers::HandlerDeps;
use crate::telegram::menu;
use crate::telegram::state::ChatState;
use crate::telegram::texts;

/// `/start`: clears any state and shows the main menu.
pub async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    deps.states.clear(msg.chat.id);
    bot.send_message(msg.chat.id, texts::START_MESSAGE)
        .reply_markup(menu::main_keyboard())
        .await?;
    Ok(())
}

/// "Служба поддержки": start capturing the question.
pub async fn handle_support_request(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    deps.states.set(msg.chat.id, ChatState::AwaitingQuestion);
    bot.send_message(msg.chat.id, texts::SUPPORT_PROMPT)
        .reply_markup(menu::remove_keyboard())
        .await?;
    Ok(())
}

/// "Инструкция": deliver the stored payload, then thank the user after a
/// fixed delay. The delay runs as a detached task so other chats are never
/// blocked behind it; a new user action does not cancel it.
pub async fn handle_instruction_request(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    let instruction = deps.store.instruction();

    if !instruction.is_available() {
        bot.send_message(msg.chat.id, texts::INSTRUCTION_UNAVAILABLE)
            .reply_markup(menu::main_keyboard())
            .await?;
        return Ok(());
    }

    if let Some(file_id) = instruction.file_id {
        bot.send_document(msg.chat.id, InputFile::file_id(FileId(file_id))).await?;
    }

    if let Some(text) = instruction.text {
        bot.send_message(msg.chat.id, text).await?;
    }

    let bot = bot.clone();
    let store = Arc::clone(&deps.store);
    let chat_id = msg.chat.id;
    tokio::spawn(async move {
        tokio::time::sleep(config::followup::thanks_delay()).await;
        let thanks = store.thanks_message();
        if let Err(e) = bot.send_message(chat_id, thanks).reply_markup(menu::main_keyboard()).await {
            log::error!("Failed to send thank-you message to chat {}: {}", chat_id, e);
        }
    });

    Ok(())
}

/// `/setchat <password>`: designates the invoking group as the support chat.
pub async fn handle_setchat_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    if !(msg.chat.is_group() || msg.chat.is_supergroup()) {
        bot.send_message(msg.chat.id, texts::SETCHAT_GROUPS_ONLY)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };

    let Some(password) = text.split_once(char::is_whitespace).map(|(_, rest)| rest.trim()) else {
        bot.send_message(msg.chat.id, texts::SETCHAT_USAGE)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    };

    if password.is_empty() {
        bot.send_message(msg.chat.id, texts::SETCHAT_USAGE)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    if password != deps.store.admin_password() {
        bot.send_message(msg.chat.id, texts::SETCHAT_WRONG_PASSWORD)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    let chat_id = msg.chat.id;
    let reply = match deps.store.set_support_chat(chat_id.0) {
        Ok(()) => {
            log::info!("Support chat set to {}", chat_id);
            format!(
                "✅ Группа установлена как чат поддержки!\n\nChat ID: {}\nНазвание: {}",
                chat_id.0,
                msg.chat.title().unwrap_or("—")
            )
        }
        Err(e) => {
            log::error!("Failed to persist support chat {}: {}", chat_id, e);
            texts::SETCHAT_SAVE_FAILED.to_string()
        }
    };

    bot.send_message(chat_id, reply)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;
    Ok(())
}

/// Any other text while idle: nudge the user back to the menu.
pub async fn handle_menu_fallback(bot: &Bot, msg: &Message) -> Result<(), RequestError> {
    bot.send_message(msg.chat.id, texts::MENU_FALLBACK)
        .reply_markup(menu::main_keyboard())
        .await?;
    Ok(())
}
