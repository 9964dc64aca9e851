//! Handler types and dependencies

use std::sync::Arc;

use crate::storage::ConfigStore;
use crate::telegram::state::ChatStateStore;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: Arc<ConfigStore>,
    pub states: Arc<ChatStateStore>,
}

impl HandlerDeps {
    pub fn new(store: Arc<ConfigStore>, states: Arc<ChatStateStore>) -> Self {
        Self { store, states }
    }
}
