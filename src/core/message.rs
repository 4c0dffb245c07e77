use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in a session transcript. Created once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, content, true)
    }

    pub fn ai(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(id, content, false)
    }

    fn new(id: impl Into<String>, content: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            is_user,
            timestamp: Utc::now(),
        }
    }

    /// Speaker label used in transcripts
    pub fn speaker(&self) -> &'static str {
        if self.is_user {
            "User"
        } else {
            "AI"
        }
    }
}

/// Decoded reply to a chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub message: String,
    /// Whether the backend's content filter rewrote the reply. Absent when
    /// the backend did not say.
    pub filtered: Option<bool>,
}

/// Render messages as `User: ...` / `AI: ...` paragraphs separated by a blank
/// line. No trailing newline.
pub fn format_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", msg.speaker(), msg.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}
