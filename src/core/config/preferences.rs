//! Opaque key/value persistence for small UI preferences.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use crate::core::config::orchestrator::ConfigOrchestrator;

/// Best-effort string key/value storage. Failures are logged by the
/// implementation and never surfaced to callers.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Preferences kept in the `[preferences]` table of a config file.
pub struct ConfigPreferences {
    orchestrator: Arc<ConfigOrchestrator>,
}

impl ConfigPreferences {
    pub fn new(orchestrator: Arc<ConfigOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

impl PreferenceStore for ConfigPreferences {
    fn get(&self, key: &str) -> Option<String> {
        match self.orchestrator.load_with_cache() {
            Ok(config) => config.preference(key).map(str::to_string),
            Err(err) => {
                warn!(key, error = %err, "could not read preference");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let result = self.orchestrator.mutate(|config| {
            config.set_preference(key, value);
            Ok(())
        });
        if let Err(err) = result {
            warn!(key, error = %err, "could not persist preference");
        }
    }
}

/// Process-local preferences that vanish with the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
