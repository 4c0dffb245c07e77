use crate::core::config::data::{path_display, Config};
use crate::utils::fs::write_atomically;
use directories::ProjectDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Why the config file could not be loaded.
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file exists but is not a valid faceless config.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (action, path) = match self {
            ConfigError::Read { path, .. } => ("read", path),
            ConfigError::Parse { path, .. } => ("parse", path),
        };
        write!(f, "Failed to {action} config at {}", path_display(path))?;
        match self {
            ConfigError::Read { source, .. } => write!(f, ": {source}"),
            ConfigError::Parse { source, .. } => write!(f, ": {source}"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl Config {
    /// Load the config at `config_path`. A missing file is an empty config.
    pub fn load_from_path(config_path: &Path) -> Result<Config, Box<dyn StdError>> {
        let contents = match fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path.to_path_buf(),
                    source,
                }
                .into())
            }
        };
        toml::from_str(&contents).map_err(|source| {
            ConfigError::Parse {
                path: config_path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    pub(crate) fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn StdError>> {
        let contents = toml::to_string_pretty(self)?;
        write_atomically(config_path, contents.as_bytes())?;
        Ok(())
    }

    /// Platform config location, or `./faceless.toml` when the platform has
    /// no home directory to anchor one.
    pub fn get_config_path() -> PathBuf {
        ProjectDirs::from("org", "faceless", "faceless")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("faceless.toml"))
    }
}
