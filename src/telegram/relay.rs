//! The relay protocol between end users and the support group
//!
//! Outbound: a captured question (text or media) is turned into a routed
//! record that deliberately ends in `id пользователя: <id>` so the
//! requester can be recovered later; media is additionally forwarded
//! verbatim so operators see the raw content.
//!
//! Inbound: every reply inside the configured support chat is treated as an
//! operator response. The target chat id is parsed out of the replied-to
//! record's trailing `: <id>`; a reply to anything else yields a relay
//! failure message instead of a dead handler.

use teloxide::prelude::*;
use teloxide::types::{InputFile, ReplyParameters};
use teloxide::RequestError;

use crate::telegram::handlers::HandlerDeps;
use crate::telegram::menu;
use crate::telegram::texts;

/// Builds the routed record sent into the support chat. Must keep the user
/// id as the trailing text; `parse_target_user_id` depends on it.
pub fn compose_question_record(username: Option<&str>, user_id: u64, question: &str) -> String {
    let handle = match username {
        Some(username) => format!("@{username}"),
        None => texts::NO_USERNAME.to_string(),
    };
    format!("Вопрос от пользователя: {question}\nНик: {handle}\nid пользователя: {user_id}")
}

/// Recovers the requester's chat id from a routed record: the substring
/// after the last colon, parsed as an integer.
pub fn parse_target_user_id(text: &str) -> Option<ChatId> {
    let tail = text.rsplit(':').next()?;
    tail.trim().parse::<i64>().ok().map(ChatId)
}

/// Human-readable label for a media question; `None` for payloads the relay
/// does not accept.
pub fn media_label(msg: &Message) -> Option<String> {
    if msg.photo().is_some() {
        Some("Фото".to_string())
    } else if msg.video().is_some() {
        Some("Видео".to_string())
    } else if let Some(document) = msg.document() {
        let name = document.file_name.as_deref().unwrap_or("Неизвестный файл");
        Some(format!("Документ ({name})"))
    } else if msg.audio().is_some() {
        Some("Аудио".to_string())
    } else if msg.voice().is_some() {
        Some("Голосовое сообщение".to_string())
    } else if msg.sticker().is_some() {
        Some("Стикер".to_string())
    } else if msg.animation().is_some() {
        Some("GIF".to_string())
    } else {
        None
    }
}

/// A captured support question leaves the user's chat here. The attempt is
/// consumed (state cleared) no matter what happens to delivery.
pub async fn forward_to_support(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), RequestError> {
    let question = if let Some(text) = msg.text() {
        text.to_string()
    } else if let Some(label) = media_label(msg) {
        format!("{label} (см. вложение)\n{}", texts::REPLY_HINT)
    } else {
        // Unsupported payload: keep waiting for something the relay can carry.
        return Ok(());
    };

    deps.states.clear(msg.chat.id);

    let support_chat = deps.store.support_chat();
    if support_chat == 0 {
        bot.send_message(msg.chat.id, texts::SUPPORT_CHAT_NOT_CONFIGURED)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }
    let support_chat = ChatId(support_chat);

    // Operators get the raw content first, then the routed record.
    if msg.text().is_none() {
        bot.forward_message(support_chat, msg.chat.id, msg.id).await?;
    }

    let user = msg.from.as_ref();
    let username = user.and_then(|user| user.username.as_deref());
    let user_id = user.map(|user| user.id.0).unwrap_or(msg.chat.id.0 as u64);

    let record = compose_question_record(username, user_id, &question);
    let mut request = bot.send_message(support_chat, record);
    if let Some(keyboard) = username.and_then(menu::contact_keyboard) {
        request = request.reply_markup(keyboard);
    }
    request.await?;

    bot.send_message(msg.chat.id, texts::QUESTION_FORWARDED)
        .reply_parameters(ReplyParameters::new(msg.id))
        .reply_markup(menu::main_keyboard())
        .await?;
    Ok(())
}

/// Listener for the configured support chat. Only replies are acted on;
/// everything else in the group is left alone.
pub async fn handle_support_chat_message(bot: &Bot, msg: &Message, _deps: &HandlerDeps) -> Result<(), RequestError> {
    let Some(replied) = msg.reply_to_message() else {
        return Ok(());
    };

    let Some(target) = replied.text().and_then(parse_target_user_id) else {
        log::warn!(
            "Reply {} in support chat {} does not resolve to a user id",
            msg.id.0,
            msg.chat.id
        );
        bot.send_message(msg.chat.id, texts::RELAY_UNKNOWN_RECIPIENT)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    };

    if let Some(text) = msg.text() {
        bot.send_message(target, text).await?;
        bot.send_message(msg.chat.id, texts::RELAY_TEXT_SENT)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    let delivered = if let Some(photos) = msg.photo() {
        match photos.last() {
            Some(photo) => {
                let mut request = bot.send_photo(target, InputFile::file_id(photo.file.id.clone()));
                if let Some(caption) = msg.caption() {
                    request = request.caption(caption.to_string());
                }
                request.await?;
                true
            }
            None => false,
        }
    } else if let Some(video) = msg.video() {
        let mut request = bot.send_video(target, InputFile::file_id(video.file.id.clone()));
        if let Some(caption) = msg.caption() {
            request = request.caption(caption.to_string());
        }
        request.await?;
        true
    } else if let Some(document) = msg.document() {
        let mut request = bot.send_document(target, InputFile::file_id(document.file.id.clone()));
        if let Some(caption) = msg.caption() {
            request = request.caption(caption.to_string());
        }
        request.await?;
        true
    } else {
        false
    };

    if delivered {
        bot.send_message(msg.chat.id, texts::RELAY_MEDIA_SENT)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
    }
    Ok(())
}
