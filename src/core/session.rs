use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::message::ChatMessage;
use crate::core::persona::Persona;

/// Chat behavior flag sent with every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    #[default]
    Regular,
    Uncensored,
}

impl ChatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatMode::Regular => "regular",
            ChatMode::Uncensored => "uncensored",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ChatMode::Regular => ChatMode::Uncensored,
            ChatMode::Uncensored => ChatMode::Regular,
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One continuous conversation: persona, mode, and message history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub persona: Option<Persona>,
    pub mode: ChatMode,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(id: impl Into<String>, persona: Option<Persona>) -> Self {
        Self {
            id: id.into(),
            persona,
            mode: ChatMode::Regular,
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// File name used when exporting this session's transcript
    pub fn export_file_name(&self) -> String {
        format!("chat-{}.txt", self.id)
    }
}

/// Hands out creation-time ids (milliseconds since the epoch).
///
/// Ids are strictly increasing: two requests within the same millisecond
/// get consecutive values.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}
