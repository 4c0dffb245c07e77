use serde::{Deserialize, Serialize};

use crate::core::persona::Persona;

#[derive(Deserialize, Debug)]
pub struct PersonaPayload {
    pub id: i64,
    pub description: String,
    pub is_custom: bool,
}

impl From<PersonaPayload> for Persona {
    fn from(payload: PersonaPayload) -> Self {
        Persona {
            id: payload.id,
            description: payload.description,
            is_custom: payload.is_custom,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct AddPersonaRequest<'a> {
    pub description: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct DeletePersonaReply {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct HealthPayload {
    pub status: String,
    #[serde(default)]
    pub groq_configured: bool,
}

/// Error body returned by the backend on non-2xx responses.
///
/// Validation failures carry only `detail`; unhandled errors also set
/// `error`.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn reason(self) -> Option<String> {
        self.detail.or(self.error)
    }
}
