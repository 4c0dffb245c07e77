use serde::{Deserialize, Serialize};
use std::fmt;

/// A chat personality the backend assumes when answering.
///
/// Personas are either generated by the server or authored by the user
/// (`is_custom`). Identity is the server-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: i64,
    pub description: String,
    pub is_custom: bool,
}

impl Persona {
    pub fn new(id: i64, description: impl Into<String>, is_custom: bool) -> Self {
        Self {
            id,
            description: description.into(),
            is_custom,
        }
    }

    /// Short one-line label used in listings and prompts
    pub fn label(&self) -> String {
        let kind = if self.is_custom { "custom" } else { "built-in" };
        format!("#{} ({kind})", self.id)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.description)
    }
}

/// Personas made available during this run.
///
/// The roster only grows: custom personas are appended as the backend
/// confirms them and nothing is ever removed locally.
#[derive(Debug, Default, Clone)]
pub struct PersonaRoster {
    personas: Vec<Persona>,
}

impl PersonaRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, persona: Persona) {
        self.personas.push(persona);
    }

    pub fn list(&self) -> &[Persona] {
        &self.personas
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
