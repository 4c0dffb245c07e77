//! Settings management for CLI set/unset commands.
//!
//! Each config key has a [`SettingHandler`] that edits a [`Config`] in
//! memory; [`run_set`] and [`run_unset`] wrap that in a persisted mutation.

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod registry;


pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::{path_display, Config};
use crate::core::config::ConfigOrchestrator;

/// Trait for handling a configuration setting.
pub trait SettingHandler: Send + Sync {
    /// The configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Apply `args` to `config`, returning the message to show on success.
    fn set(&self, config: &mut Config, args: &[String]) -> Result<String, SettingError>;

    fn unset(&self, config: &mut Config) -> Result<String, SettingError>;

    /// Current value for display in `faceless set` output.
    fn format(&self, config: &Config) -> String;
}

pub fn run_set(registry: &SettingRegistry, key: &str, args: &[String]) -> Result<String, SettingError> {
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    persist(|config| handler.set(config, args))
}

pub fn run_unset(registry: &SettingRegistry, key: &str) -> Result<String, SettingError> {
    let handler = registry
        .get(key)
        .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
    persist(|config| handler.unset(config))
}

/// Render every key with its current value.
pub fn describe_settings(registry: &SettingRegistry, config: &Config) -> String {
    let mut out = format!(
        "Current configuration ({}):",
        path_display(ConfigOrchestrator::global().path())
    );
    for handler in registry.handlers() {
        out.push('\n');
        out.push_str(&handler.format(config));
    }
    out
}

/// Run `edit` against the persisted config. Nothing is written when the
/// edit is rejected.
fn persist<F>(edit: F) -> Result<String, SettingError>
where
    F: FnOnce(&mut Config) -> Result<String, SettingError>,
{
    Config::mutate(|config| edit(config).map_err(Into::into)).map_err(|err| {
        match err.downcast::<SettingError>() {
            Ok(rejected) => *rejected,
            Err(other) => SettingError::ConfigError(other.to_string()),
        }
    })
}
