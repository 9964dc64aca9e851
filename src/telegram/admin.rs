//! Admin panel: a password-gated state machine for managing the instruction
//!
//! `/admin` (private chats only) asks for the password; one wrong attempt
//! drops back to idle. From the menu the operator can upload a new
//! instruction file, replace the instruction text, view what is currently
//! stored, or exit. Admin states never expire on their own.

use teloxide::prelude::*;
use teloxide::types::{ChatKind, FileId, InputFile, ReplyParameters};
use teloxide::RequestError;

use crate::telegram::handlers::HandlerDeps;
use crate::telegram::menu;
use crate::telegram::state::ChatState;
use crate::telegram::texts;

/// Entry point for `/admin`. Re-entering while already in an admin state
/// restarts the password gate.
pub async fn handle_admin_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    if !matches!(msg.chat.kind, ChatKind::Private(_)) {
        bot.send_message(msg.chat.id, texts::ADMIN_PRIVATE_ONLY)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    deps.states.set(msg.chat.id, ChatState::AwaitingPassword);
    bot.send_message(msg.chat.id, texts::ADMIN_PASSWORD_PROMPT)
        .reply_markup(menu::remove_keyboard())
        .await?;
    Ok(())
}

/// One password attempt. Anything that is not the exact stored password
/// clears the state again.
pub async fn process_password(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if text != deps.store.admin_password() {
        deps.states.clear(msg.chat.id);
        bot.send_message(msg.chat.id, texts::ADMIN_ACCESS_DENIED).await?;
        return Ok(());
    }

    deps.states.set(msg.chat.id, ChatState::AdminMenu);
    bot.send_message(msg.chat.id, texts::ADMIN_WELCOME)
        .reply_markup(menu::admin_keyboard())
        .await?;
    Ok(())
}

/// Menu selection while in the admin menu. Unknown input is ignored so a
/// stray message does not kick the operator out.
pub async fn handle_menu_selection(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match text {
        texts::BTN_ADMIN_UPLOAD => {
            deps.states.set(msg.chat.id, ChatState::AwaitingUpload);
            bot.send_message(msg.chat.id, texts::ADMIN_UPLOAD_PROMPT)
                .reply_markup(menu::remove_keyboard())
                .await?;
        }
        texts::BTN_ADMIN_EDIT_TEXT => {
            deps.states.set(msg.chat.id, ChatState::AwaitingTextEdit);
            bot.send_message(msg.chat.id, texts::ADMIN_EDIT_TEXT_PROMPT)
                .reply_markup(menu::remove_keyboard())
                .await?;
        }
        texts::BTN_ADMIN_VIEW => {
            view_instruction(bot, msg, deps).await?;
        }
        texts::BTN_ADMIN_EXIT => {
            deps.states.clear(msg.chat.id);
            bot.send_message(msg.chat.id, texts::ADMIN_EXIT)
                .reply_markup(menu::remove_keyboard())
                .await?;
        }
        _ => {}
    }
    Ok(())
}

/// Shows what is currently stored: the document if present, then the text
/// if present. No state transition.
async fn view_instruction(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    let instruction = deps.store.instruction();

    if !instruction.is_available() {
        bot.send_message(msg.chat.id, texts::ADMIN_NOTHING_UPLOADED).await?;
        return Ok(());
    }

    if let Some(file_id) = instruction.file_id {
        bot.send_document(msg.chat.id, InputFile::file_id(FileId(file_id))).await?;
    }

    match instruction.text {
        Some(text) => {
            bot.send_message(msg.chat.id, format!("{}\n\n{}", texts::ADMIN_TEXT_HEADER, text))
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, texts::ADMIN_NO_TEXT).await?;
        }
    }
    Ok(())
}

/// Waits for the instruction document. `/cancel` returns to the menu; a
/// document is stored and the flow returns to the menu whether or not the
/// write succeeded.
pub async fn handle_upload(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    if msg.text().is_some_and(|text| text.starts_with("/cancel")) {
        deps.states.set(msg.chat.id, ChatState::AdminMenu);
        bot.send_message(msg.chat.id, texts::ADMIN_CANCELLED)
            .reply_markup(menu::admin_keyboard())
            .await?;
        return Ok(());
    }

    let Some(document) = msg.document() else {
        return Ok(());
    };

    let file_id = document.file.id.0.clone();
    let reply = match deps.store.update_instruction(Some(file_id), None) {
        Ok(()) => texts::ADMIN_UPLOAD_OK,
        Err(e) => {
            log::error!("Failed to store instruction file for chat {}: {}", msg.chat.id, e);
            texts::ADMIN_SAVE_FAILED
        }
    };

    deps.states.set(msg.chat.id, ChatState::AdminMenu);
    bot.send_message(msg.chat.id, reply)
        .reply_markup(menu::admin_keyboard())
        .await?;
    Ok(())
}

/// Waits for the new instruction text. Same cancel/return contract as the
/// upload state.
pub async fn handle_text_edit(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if text.starts_with("/cancel") {
        deps.states.set(msg.chat.id, ChatState::AdminMenu);
        bot.send_message(msg.chat.id, texts::ADMIN_CANCELLED)
            .reply_markup(menu::admin_keyboard())
            .await?;
        return Ok(());
    }

    let reply = match deps.store.update_instruction(None, Some(text.to_string())) {
        Ok(()) => texts::ADMIN_TEXT_OK,
        Err(e) => {
            log::error!("Failed to store instruction text for chat {}: {}", msg.chat.id, e);
            texts::ADMIN_SAVE_FAILED
        }
    };

    deps.states.set(msg.chat.id, ChatState::AdminMenu);
    bot.send_message(msg.chat.id, reply)
        .reply_markup(menu::admin_keyboard())
        .await?;
    Ok(())
}
