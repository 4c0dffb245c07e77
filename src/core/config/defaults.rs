use crate::core::config::data::Config;
use crate::core::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::utils::url::normalize_base_url;
use std::path::PathBuf;

impl Config {
    /// Backend base URL: CLI flag, then `FACELESS_API_BASE_URL`, then the
    /// config file, then the local default.
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        let env_value = std::env::var(BASE_URL_ENV).ok();
        self.pick_base_url(cli_override, env_value.as_deref())
    }

    pub(crate) fn pick_base_url(&self, cli_override: Option<&str>, env_value: Option<&str>) -> String {
        let chosen = [cli_override, env_value, self.base_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        normalize_base_url(chosen)
    }

    pub fn resolve_export_dir(&self) -> PathBuf {
        match self.export_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from("."),
        }
    }
}
