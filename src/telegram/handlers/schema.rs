//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::state::ChatState;
use crate::telegram::texts;
use crate::telegram::{admin, relay, support};

/// Creates the main dispatcher schema for the bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in integration
/// tests.
///
/// Branch order is the protocol: the admin flow has first refusal on every
/// update, then the hidden commands, then the user flow, then the
/// support-chat relay listener, and finally the idle-text fallback.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_admin_entry = deps.clone();
    let deps_admin_flow = deps.clone();
    let deps_setchat = deps.clone();
    let deps_commands = deps.clone();
    let deps_question = deps.clone();
    let deps_menu = deps.clone();
    let deps_relay = deps.clone();
    let deps_fallback = deps;

    dptree::entry()
        .branch(admin_command_handler(deps_admin_entry))
        .branch(admin_flow_handler(deps_admin_flow))
        .branch(setchat_handler(deps_setchat))
        .branch(command_handler(deps_commands))
        .branch(question_handler(deps_question))
        .branch(menu_handler(deps_menu))
        .branch(relay_handler(deps_relay))
        .branch(fallback_handler(deps_fallback))
}

/// Handler for the hidden /admin command (not advertised in the Command enum)
fn admin_command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text.starts_with("/admin")).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = admin::handle_admin_command(&bot, &msg, &deps).await {
                    log::error!("/admin handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for every chat currently inside the admin state machine
fn admin_flow_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_filter = deps.clone();
    Update::filter_message()
        .filter(move |msg: Message| deps_filter.states.get(msg.chat.id).is_admin())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let result = match deps.states.get(msg.chat.id) {
                    ChatState::AwaitingPassword => admin::process_password(&bot, &msg, &deps).await,
                    ChatState::AdminMenu => admin::handle_menu_selection(&bot, &msg, &deps).await,
                    ChatState::AwaitingUpload => admin::handle_upload(&bot, &msg, &deps).await,
                    ChatState::AwaitingTextEdit => admin::handle_text_edit(&bot, &msg, &deps).await,
                    ChatState::Idle | ChatState::AwaitingQuestion => Ok(()),
                };
                if let Err(e) = result {
                    log::error!("Admin flow handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for the hidden /setchat command (groups only)
fn setchat_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text.starts_with("/setchat")).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = support::handle_setchat_command(&bot, &msg, &deps).await {
                    log::error!("/setchat handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for public bot commands (/start)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                match cmd {
                    Command::Start => {
                        if let Err(e) = support::handle_start_command(&bot, &msg, &deps).await {
                            log::error!("/start handler failed for chat {}: {}", msg.chat.id, e);
                        }
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Handler for chats that are in the middle of writing a support question
fn question_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_filter = deps.clone();
    Update::filter_message()
        .filter(move |msg: Message| deps_filter.states.get(msg.chat.id) == ChatState::AwaitingQuestion)
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = relay::forward_to_support(&bot, &msg, &deps).await {
                    log::error!("Support question relay failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for main-menu selections from idle chats
fn menu_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_filter = deps.clone();
    Update::filter_message()
        .filter(move |msg: Message| {
            deps_filter.states.get(msg.chat.id) == ChatState::Idle
                && msg
                    .text()
                    .map(|text| text == texts::BTN_SUPPORT || text == texts::BTN_INSTRUCTION)
                    .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let result = match msg.text() {
                    Some(texts::BTN_SUPPORT) => support::handle_support_request(&bot, &msg, &deps).await,
                    Some(texts::BTN_INSTRUCTION) => support::handle_instruction_request(&bot, &msg, &deps).await,
                    _ => Ok(()),
                };
                if let Err(e) = result {
                    log::error!("Menu handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Listener for the configured support chat; acts on replies, swallows the
/// rest of the group traffic
fn relay_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_filter = deps.clone();
    Update::filter_message()
        .filter(move |msg: Message| {
            let support_chat = deps_filter.store.support_chat();
            support_chat != 0 && msg.chat.id.0 == support_chat
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = relay::handle_support_chat_message(&bot, &msg, &deps).await {
                    log::error!("Support chat relay failed for message {}: {}", msg.id.0, e);
                }
                Ok(())
            }
        })
}

/// Handler for unclassified text from idle chats
fn fallback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(move |msg: Message| {
            deps.states.get(msg.chat.id) == ChatState::Idle
                && msg.text().map(|text| !text.starts_with('/')).unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message| async move {
            if let Err(e) = support::handle_menu_fallback(&bot, &msg).await {
                log::error!("Menu fallback failed for chat {}: {}", msg.chat.id, e);
            }
            Ok(())
        })
}
