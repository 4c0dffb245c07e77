//! Handlers for the individual config keys.

use super::error::SettingError;
use super::helpers::{success_set, success_unset, validate_base_url, validate_theme};
use super::SettingHandler;
use crate::core::config::data::Config;
use crate::core::constants::{DEFAULT_BASE_URL, THEME_PREFERENCE_KEY};
use crate::utils::url::normalize_base_url;

/// Handler for the `base-url` setting.
pub struct BaseUrlHandler;

impl SettingHandler for BaseUrlHandler {
    fn key(&self) -> &'static str {
        "base-url"
    }

    fn set(&self, config: &mut Config, args: &[String]) -> Result<String, SettingError> {
        let Some(input) = args.first() else {
            return Err(SettingError::MissingArgs {
                hint: "To set the backend address, specify a URL:",
                example: "faceless set base-url http://localhost:8000",
            });
        };
        let url = normalize_base_url(&validate_base_url(input)?);
        let message = success_set(self.key(), &url);
        config.base_url = Some(url);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.base_url = None;
        Ok(success_unset(self.key()))
    }

    fn format(&self, config: &Config) -> String {
        match &config.base_url {
            Some(url) => format!("  base-url: {url}"),
            None => format!("  base-url: (unset, default {DEFAULT_BASE_URL})"),
        }
    }
}

/// Handler for the `export-dir` setting.
pub struct ExportDirHandler;

impl SettingHandler for ExportDirHandler {
    fn key(&self) -> &'static str {
        "export-dir"
    }

    fn set(&self, config: &mut Config, args: &[String]) -> Result<String, SettingError> {
        // Directory names may contain spaces
        let dir = args.join(" ");
        if dir.trim().is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set where transcripts are saved, specify a directory:",
                example: "faceless set export-dir ~/Documents/chats",
            });
        }
        let message = success_set(self.key(), &dir);
        config.export_dir = Some(dir);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.export_dir = None;
        Ok(success_unset(self.key()))
    }

    fn format(&self, config: &Config) -> String {
        match &config.export_dir {
            Some(dir) => format!("  export-dir: {dir}"),
            None => "  export-dir: (unset, working directory)".to_string(),
        }
    }
}

/// Handler for the `theme` setting.
///
/// Unsetting hands the choice back to the system appearance.
pub struct ThemeHandler;

impl SettingHandler for ThemeHandler {
    fn key(&self) -> &'static str {
        "theme"
    }

    fn set(&self, config: &mut Config, args: &[String]) -> Result<String, SettingError> {
        let Some(input) = args.first() else {
            return Err(SettingError::MissingArgs {
                hint: "To set a theme, specify dark or light:",
                example: "faceless set theme dark",
            });
        };
        let theme = validate_theme(input)?;
        config.set_preference(THEME_PREFERENCE_KEY, theme);
        Ok(success_set(self.key(), theme))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.unset_preference(THEME_PREFERENCE_KEY);
        Ok(success_unset(self.key()))
    }

    fn format(&self, config: &Config) -> String {
        match config.preference(THEME_PREFERENCE_KEY) {
            Some(theme) => format!("  theme: {theme}"),
            None => "  theme: (unset, follows system)".to_string(),
        }
    }
}
