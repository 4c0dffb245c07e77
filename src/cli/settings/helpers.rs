//! Helper functions for settings operations.

use super::error::SettingError;

pub fn success_set(key: &str, value: &str) -> String {
    format!("✅ Set {key} to: {value}")
}

pub fn success_unset(key: &str) -> String {
    format!("✅ Unset {key}")
}

/// Accept `http://` and `https://` addresses only.
pub fn validate_base_url(input: &str) -> Result<String, SettingError> {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(SettingError::InvalidValue {
            key: "base-url",
            input: input.to_string(),
            hint: "Use a full address such as http://localhost:8000",
        })
    }
}

pub fn validate_theme(input: &str) -> Result<&'static str, SettingError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "dark" => Ok("dark"),
        "light" => Ok("light"),
        _ => Err(SettingError::InvalidValue {
            key: "theme",
            input: input.to_string(),
            hint: "Use 'dark' or 'light'",
        }),
    }
}
