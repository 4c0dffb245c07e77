use std::path::PathBuf;
use tracing::{debug, info};

use super::{ChatError, ChatStore};
use crate::core::backend::ChatTurn;
use crate::core::message::{format_transcript, ChatMessage, ChatResponse};
use crate::utils::fs::write_atomically;

impl ChatStore {
    /// Send one user message and append the reply.
    ///
    /// Requires a session with a persona; otherwise nothing changes and
    /// `InvalidOperation` is returned. The user message is appended before
    /// the request goes out and stays there if the request fails.
    pub async fn send_message(&mut self, content: &str) -> Result<ChatResponse, ChatError> {
        let turn = match self.current_session.as_ref() {
            Some(session) => match session.persona.as_ref() {
                Some(persona) => ChatTurn {
                    message: content.to_string(),
                    persona: persona.description.clone(),
                    mode: session.mode,
                    session_id: session.id.clone(),
                },
                None => return Err(ChatError::InvalidOperation("No active session or persona")),
            },
            None => return Err(ChatError::InvalidOperation("No active session or persona")),
        };

        self.error = None;
        let user_message = ChatMessage::user(self.ids.next_id(), content);
        self.push_message(user_message);

        self.is_loading = true;
        let result = self.backend.send_message(turn).await;
        self.is_loading = false;

        match result {
            Ok(response) => {
                if response.filtered == Some(true) {
                    debug!("reply was filtered by the backend");
                }
                let ai_message = ChatMessage::ai(self.ids.next_id(), response.message.clone());
                self.push_message(ai_message);
                Ok(response)
            }
            Err(err) => {
                self.error = Some("Failed to send message".to_string());
                Err(err.into())
            }
        }
    }

    /// Export the current transcript to `chat-<session id>.txt` in the export
    /// directory.
    ///
    /// Returns `Ok(None)` without touching the filesystem when there is no
    /// session or it has no messages. An earlier export of the same session
    /// is overwritten.
    pub fn download_chat_history(&self) -> Result<Option<PathBuf>, ChatError> {
        let Some(session) = self.current_session.as_ref() else {
            return Ok(None);
        };
        if session.messages.is_empty() {
            return Ok(None);
        }

        let path = self.export_dir.join(session.export_file_name());
        let transcript = format_transcript(&session.messages);
        write_atomically(&path, transcript.as_bytes()).map_err(|source| ChatError::Export {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), messages = session.messages.len(), "chat history exported");
        Ok(Some(path))
    }

    fn push_message(&mut self, message: ChatMessage) {
        if let Some(session) = self.current_session.as_mut() {
            session.messages.push(message);
        }
    }
}
