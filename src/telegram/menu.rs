//! Reply and inline keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, KeyboardRemove};
use url::Url;

use crate::telegram::texts;

/// Main menu shown to end users: one button per section.
pub fn main_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(texts::BTN_SUPPORT)],
        vec![KeyboardButton::new(texts::BTN_INSTRUCTION)],
    ])
    .resize_keyboard()
}

/// Admin panel menu.
pub fn admin_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(texts::BTN_ADMIN_UPLOAD)],
        vec![KeyboardButton::new(texts::BTN_ADMIN_EDIT_TEXT)],
        vec![KeyboardButton::new(texts::BTN_ADMIN_VIEW)],
        vec![KeyboardButton::new(texts::BTN_ADMIN_EXIT)],
    ])
    .resize_keyboard()
}

pub fn remove_keyboard() -> KeyboardRemove {
    KeyboardRemove::new()
}

/// Deep-link button that opens a direct conversation with the user.
/// `None` when the handle does not form a valid t.me URL.
pub fn contact_keyboard(username: &str) -> Option<InlineKeyboardMarkup> {
    let url = Url::parse(&format!("https://t.me/{username}")).ok()?;
    Some(InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        texts::BTN_OPEN_CHAT,
        url,
    )]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_keyboard_has_two_rows() {
        let keyboard = main_keyboard();
        assert_eq!(keyboard.keyboard.len(), 2);
        assert_eq!(keyboard.keyboard[0][0].text, texts::BTN_SUPPORT);
        assert_eq!(keyboard.keyboard[1][0].text, texts::BTN_INSTRUCTION);
    }

    #[test]
    fn admin_keyboard_has_four_actions() {
        let keyboard = admin_keyboard();
        assert_eq!(keyboard.keyboard.len(), 4);
    }

    #[test]
    fn contact_keyboard_builds_deep_link() {
        let keyboard = contact_keyboard("somebody").unwrap();
        let button = &keyboard.inline_keyboard[0][0];
        assert_eq!(button.text, texts::BTN_OPEN_CHAT);
    }
}
