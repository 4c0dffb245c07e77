//! Application state: the chat session store and the context object that
//! bundles it with the theme store.
//!
//! There is no global store. The binary builds one [`AppContext`] at startup
//! and hands `&mut` access to whoever drives it, so at most one mutating
//! operation runs against a store at a time.

use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::backend::{BackendError, ChatBackend, HttpBackend};
use crate::core::config::{Config, ConfigOrchestrator, ConfigPreferences};
use crate::core::message::ChatMessage;
use crate::core::persona::{Persona, PersonaRoster};
use crate::core::session::{ChatMode, ChatSession, IdGenerator};
use crate::ui::theme::ThemeStore;

pub mod conversation;
pub mod session;


/// Everything a front end needs, constructed once per process.
pub struct AppContext {
    pub chat: ChatStore,
    pub theme: ThemeStore,
    pub base_url: String,
}

impl AppContext {
    /// Build the context from configuration: resolve the backend address,
    /// connect the HTTP backend, and settle the initial theme.
    pub fn from_config(
        config: &Config,
        base_url_override: Option<&str>,
    ) -> Result<Self, Box<dyn StdError>> {
        let base_url = config.resolve_base_url(base_url_override);
        let backend = HttpBackend::new(&base_url)?;
        let chat = ChatStore::new(Arc::new(backend), config.resolve_export_dir());

        let mut theme = ThemeStore::new(Box::new(ConfigPreferences::new(
            ConfigOrchestrator::global(),
        )));
        theme.init_theme();

        Ok(Self {
            chat,
            theme,
            base_url,
        })
    }
}

/// Failures surfaced by [`ChatStore`] operations that propagate errors.
#[derive(Debug)]
pub enum ChatError {
    /// The operation's preconditions were not met; nothing was changed.
    InvalidOperation(&'static str),

    /// The backend call failed. The store's `error` field has been set.
    Backend(BackendError),

    /// Writing the transcript export failed.
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::InvalidOperation(reason) => f.write_str(reason),
            ChatError::Backend(err) => write!(f, "{err}"),
            ChatError::Export { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl StdError for ChatError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ChatError::InvalidOperation(_) => None,
            ChatError::Backend(err) => Some(err),
            ChatError::Export { source, .. } => Some(source),
        }
    }
}

impl From<BackendError> for ChatError {
    fn from(err: BackendError) -> Self {
        ChatError::Backend(err)
    }
}

/// Owns the current chat session and orchestrates persona and message flow.
pub struct ChatStore {
    backend: Arc<dyn ChatBackend>,
    current_session: Option<ChatSession>,
    available_personas: PersonaRoster,
    is_loading: bool,
    error: Option<String>,
    ids: IdGenerator,
    export_dir: PathBuf,
}

impl ChatStore {
    pub fn new(backend: Arc<dyn ChatBackend>, export_dir: PathBuf) -> Self {
        Self {
            backend,
            current_session: None,
            available_personas: PersonaRoster::new(),
            is_loading: false,
            error: None,
            ids: IdGenerator::new(),
            export_dir,
        }
    }

    pub fn backend(&self) -> &Arc<dyn ChatBackend> {
        &self.backend
    }

    pub fn current_session(&self) -> Option<&ChatSession> {
        self.current_session.as_ref()
    }

    pub fn current_persona(&self) -> Option<&Persona> {
        self.current_session
            .as_ref()
            .and_then(|session| session.persona.as_ref())
    }

    /// Mode of the current session, `Regular` when there is none
    pub fn current_mode(&self) -> ChatMode {
        self.current_session
            .as_ref()
            .map(|session| session.mode)
            .unwrap_or_default()
    }

    /// Messages of the current session, empty when there is none
    pub fn messages(&self) -> &[ChatMessage] {
        self.current_session
            .as_ref()
            .map(|session| session.messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn available_personas(&self) -> &[Persona] {
        self.available_personas.list()
    }

    /// True while a backend request is in flight. Advisory only.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }
}
