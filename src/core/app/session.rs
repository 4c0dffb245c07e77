use tracing::{debug, info, warn};

use super::{ChatError, ChatStore};
use crate::core::persona::Persona;
use crate::core::session::ChatSession;

impl ChatStore {
    /// Replace the current session with a fresh one.
    ///
    /// The previous session, including its messages, is dropped.
    pub fn start_new_session(&mut self, persona: Option<Persona>) {
        let session = ChatSession::new(self.ids.next_id(), persona);
        debug!(session_id = %session.id, "started new session");
        self.current_session = Some(session);
    }

    /// Flip between regular and uncensored mode. No-op without a session.
    pub fn toggle_mode(&mut self) {
        if let Some(session) = self.current_session.as_mut() {
            session.mode = session.mode.toggled();
            debug!(session_id = %session.id, mode = %session.mode, "mode toggled");
        }
    }

    /// Ask the backend for a persona and make it the current one.
    ///
    /// An existing session keeps its id and messages and only swaps persona;
    /// without a session a new one is started. Failures are recorded in
    /// [`ChatStore::error`] and not returned.
    pub async fn generate_persona(&mut self) {
        self.error = None;
        self.is_loading = true;
        let result = self.backend.generate_persona().await;
        self.is_loading = false;

        match result {
            Ok(persona) => {
                info!(persona_id = persona.id, "persona generated");
                match self.current_session.as_mut() {
                    Some(session) => session.persona = Some(persona),
                    None => self.start_new_session(Some(persona)),
                }
            }
            Err(err) => {
                warn!(error = %err, "persona generation failed");
                self.error = Some("Failed to generate persona".to_string());
            }
        }
    }

    /// Create a custom persona on the backend and add it to the available
    /// personas. Unlike [`ChatStore::generate_persona`], failures are
    /// returned to the caller after being recorded.
    pub async fn add_custom_persona(&mut self, description: &str) -> Result<Persona, ChatError> {
        self.error = None;
        match self.backend.add_custom_persona(description).await {
            Ok(persona) => {
                info!(persona_id = persona.id, "custom persona added");
                self.available_personas.push(persona.clone());
                Ok(persona)
            }
            Err(err) => {
                self.error = Some("Failed to add custom persona".to_string());
                Err(err.into())
            }
        }
    }

    /// Start a new session with one of the personas added during this run.
    pub fn select_persona(&mut self, id: i64) -> Result<(), ChatError> {
        let persona = self
            .available_personas
            .find_by_id(id)
            .cloned()
            .ok_or(ChatError::InvalidOperation("No such persona in this session"))?;
        self.start_new_session(Some(persona));
        Ok(())
    }
}
