//! Per-chat conversation state
//!
//! Both conversational flows (admin and user) share one state slot per chat,
//! so entering an admin state and a user state are mutually exclusive by
//! construction. State is in-memory only and does not survive a restart.

use dashmap::DashMap;
use teloxide::types::ChatId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatState {
    #[default]
    Idle,
    // Admin flow
    AwaitingPassword,
    AdminMenu,
    AwaitingUpload,
    AwaitingTextEdit,
    // User flow
    AwaitingQuestion,
}

impl ChatState {
    /// True for every state owned by the admin flow.
    pub fn is_admin(self) -> bool {
        matches!(
            self,
            ChatState::AwaitingPassword | ChatState::AdminMenu | ChatState::AwaitingUpload | ChatState::AwaitingTextEdit
        )
    }
}

/// Mapping from chat id to its current conversation state.
#[derive(Debug, Default)]
pub struct ChatStateStore {
    states: DashMap<ChatId, ChatState>,
}

impl ChatStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a chat; chats without an entry are `Idle`.
    pub fn get(&self, chat_id: ChatId) -> ChatState {
        self.states.get(&chat_id).map(|entry| *entry).unwrap_or_default()
    }

    pub fn set(&self, chat_id: ChatId, state: ChatState) {
        self.states.insert(chat_id, state);
    }

    /// Resets a chat back to `Idle`.
    pub fn clear(&self, chat_id: ChatId) {
        self.states.remove(&chat_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const CHAT: ChatId = ChatId(42);

    #[test]
    fn unknown_chat_is_idle() {
        let store = ChatStateStore::new();
        assert_eq!(store.get(CHAT), ChatState::Idle);
    }

    #[test]
    fn set_and_clear() {
        let store = ChatStateStore::new();

        store.set(CHAT, ChatState::AwaitingQuestion);
        assert_eq!(store.get(CHAT), ChatState::AwaitingQuestion);

        store.clear(CHAT);
        assert_eq!(store.get(CHAT), ChatState::Idle);
    }

    #[test]
    fn admin_and_user_states_share_one_slot() {
        let store = ChatStateStore::new();

        store.set(CHAT, ChatState::AdminMenu);
        store.set(CHAT, ChatState::AwaitingQuestion);

        // Entering a user state implies the admin flow is no longer active.
        assert_eq!(store.get(CHAT), ChatState::AwaitingQuestion);
        assert!(!store.get(CHAT).is_admin());
    }

    #[test]
    fn states_are_independent_per_chat() {
        let store = ChatStateStore::new();

        store.set(ChatId(1), ChatState::AwaitingPassword);
        assert_eq!(store.get(ChatId(2)), ChatState::Idle);
    }

    #[test]
    fn admin_state_classification() {
        assert!(ChatState::AwaitingPassword.is_admin());
        assert!(ChatState::AdminMenu.is_admin());
        assert!(ChatState::AwaitingUpload.is_admin());
        assert!(ChatState::AwaitingTextEdit.is_admin());
        assert!(!ChatState::Idle.is_admin());
        assert!(!ChatState::AwaitingQuestion.is_admin());
    }
}
