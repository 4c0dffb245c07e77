//! Seam between the chat store and the remote persona chat service.
//!
//! [`ChatBackend`] is what the store talks to; [`HttpBackend`] is the real
//! implementation. Errors are logged where they happen and handed back
//! unchanged, with no retry.

mod http;
#[cfg(test)]
mod tests;

pub use http::HttpBackend;

use async_trait::async_trait;
use reqwest::StatusCode;
use std::error::Error as StdError;
use std::fmt;

use crate::core::message::ChatResponse;
use crate::core::persona::Persona;
use crate::core::session::ChatMode;

/// One chat turn as handed to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub message: String,
    /// Persona description the backend should answer as
    pub persona: String,
    pub mode: ChatMode,
    /// Local session id. Not transmitted; kept for diagnostics.
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    /// Whether the backend has an LLM provider configured
    pub chat_configured: bool,
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn generate_persona(&self) -> Result<Persona, BackendError>;

    async fn add_custom_persona(&self, description: &str) -> Result<Persona, BackendError>;

    async fn send_message(&self, turn: ChatTurn) -> Result<ChatResponse, BackendError>;

    async fn get_personas(&self) -> Result<Vec<Persona>, BackendError>;

    /// Remove a custom persona on the server. Returns the server's
    /// confirmation text.
    async fn delete_persona(&self, id: i64) -> Result<String, BackendError>;

    async fn health(&self) -> Result<HealthStatus, BackendError>;
}

/// Failures talking to the backend.
#[derive(Debug)]
pub enum BackendError {
    /// The request never produced a response: connect failure, timeout, or a
    /// broken body.
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    Status {
        endpoint: String,
        status: StatusCode,
        /// Reason extracted from the backend's error body, when it sent one.
        detail: Option<String>,
    },

    /// The body did not have the expected shape.
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
}

impl BackendError {
    /// True for network and HTTP failures, false for shape mismatches.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BackendError::Transport { .. } | BackendError::Status { .. }
        )
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            BackendError::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            BackendError::Transport { endpoint, .. }
            | BackendError::Status { endpoint, .. }
            | BackendError::Decode { endpoint, .. } => endpoint,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Transport { endpoint, source } => {
                if source.is_timeout() {
                    write!(f, "Request to {endpoint} timed out")
                } else {
                    write!(f, "Request to {endpoint} failed: {source}")
                }
            }
            BackendError::Status {
                endpoint,
                status,
                detail,
            } => match detail {
                Some(detail) => write!(f, "{endpoint} returned {status}: {detail}"),
                None => write!(f, "{endpoint} returned {status}"),
            },
            BackendError::Decode { endpoint, source } => {
                write!(f, "Unexpected response from {endpoint}: {source}")
            }
        }
    }
}

impl StdError for BackendError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            BackendError::Transport { source, .. } => Some(source),
            BackendError::Decode { source, .. } => Some(source),
            BackendError::Status { .. } => None,
        }
    }
}
