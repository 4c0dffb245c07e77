//! Shared constants used across the application

use std::time::Duration;

/// Backend address used when neither the CLI, the environment, nor the
/// config file names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "FACELESS_API_BASE_URL";

/// Environment variable holding the `tracing` filter directives.
pub const LOG_FILTER_ENV: &str = "FACELESS_LOG";

/// Every backend request gives up after this long. Not configurable.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Preference key under which the display mode is persisted.
pub const THEME_PREFERENCE_KEY: &str = "theme";
