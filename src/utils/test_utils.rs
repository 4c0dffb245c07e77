#[cfg(test)]
use crate::core::app::{AppContext, ChatStore};
#[cfg(test)]
use crate::core::backend::{BackendError, ChatBackend, ChatTurn, HealthStatus};
#[cfg(test)]
use crate::core::config::MemoryPreferences;
#[cfg(test)]
use crate::core::message::ChatResponse;
#[cfg(test)]
use crate::core::persona::Persona;
#[cfg(test)]
use crate::ui::theme::ThemeStore;
#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use std::path::PathBuf;
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Backend that always succeeds with canned data.
///
/// Generated personas get ids counting up from 100, custom ones from 200.
/// The server-side persona list starts with whatever `server_personas` holds
/// and `delete_persona` removes from it.
#[cfg(test)]
#[derive(Default)]
pub struct StubBackend {
    pub server_personas: Mutex<Vec<Persona>>,
    pub turns: Mutex<Vec<ChatTurn>>,
    pub filtered: bool,
    pub(crate) next_generated: Mutex<i64>,
    pub(crate) next_custom: Mutex<i64>,
}

#[cfg(test)]
impl StubBackend {
    pub fn with_server_personas(personas: Vec<Persona>) -> Self {
        Self {
            server_personas: Mutex::new(personas),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ChatBackend for StubBackend {
    async fn generate_persona(&self) -> Result<Persona, BackendError> {
        let mut next = self.next_generated.lock().unwrap();
        *next += 1;
        Ok(Persona::new(100 + *next, "a generated stranger", false))
    }

    async fn add_custom_persona(&self, description: &str) -> Result<Persona, BackendError> {
        let mut next = self.next_custom.lock().unwrap();
        *next += 1;
        let persona = Persona::new(200 + *next, description, true);
        self.server_personas.lock().unwrap().push(persona.clone());
        Ok(persona)
    }

    async fn send_message(&self, turn: ChatTurn) -> Result<ChatResponse, BackendError> {
        let message = format!("echo: {}", turn.message);
        self.turns.lock().unwrap().push(turn);
        Ok(ChatResponse {
            message,
            filtered: Some(self.filtered),
        })
    }

    async fn get_personas(&self) -> Result<Vec<Persona>, BackendError> {
        Ok(self.server_personas.lock().unwrap().clone())
    }

    async fn delete_persona(&self, id: i64) -> Result<String, BackendError> {
        self.server_personas.lock().unwrap().retain(|p| p.id != id);
        Ok("Persona deleted successfully".to_string())
    }

    async fn health(&self) -> Result<HealthStatus, BackendError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            chat_configured: true,
        })
    }
}

/// Context wired to `backend`, in-memory preferences, and a light theme.
#[cfg(test)]
pub fn create_test_context(backend: Arc<dyn ChatBackend>, export_dir: PathBuf) -> AppContext {
    let mut theme = ThemeStore::with_system_detector(Box::new(MemoryPreferences::new()), || None);
    theme.init_theme();
    AppContext {
        chat: ChatStore::new(backend, export_dir),
        theme,
        base_url: "http://localhost:8000".to_string(),
    }
}

#[cfg(test)]
pub fn create_stub_context() -> (AppContext, Arc<StubBackend>) {
    let backend = Arc::new(StubBackend::default());
    let ctx = create_test_context(backend.clone(), PathBuf::from("."));
    (ctx, backend)
}
