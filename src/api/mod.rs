use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::session::ChatMode;

/// Body of `POST /chat`.
///
/// `conversation_history` is always empty: the backend answers each turn on
/// its own and the client never resends earlier messages.
#[derive(Serialize, Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    pub persona: String,
    pub mode: ChatMode,
    pub conversation_history: Vec<Value>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, persona: impl Into<String>, mode: ChatMode) -> Self {
        Self {
            message: message.into(),
            persona: persona.into(),
            mode,
            conversation_history: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub filtered: Option<bool>,
}

pub mod models;
