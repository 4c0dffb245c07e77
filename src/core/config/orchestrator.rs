use crate::core::config::data::Config;
use std::error::Error as StdError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

#[derive(Default)]
struct ConfigCacheState {
    config: Option<Config>,
    modified: Option<SystemTime>,
}

/// Cached access to one config file.
///
/// The parsed config is kept in memory and reloaded whenever the file's
/// modification time changes, so edits made by another process are picked
/// up on the next read.
pub struct ConfigOrchestrator {
    path: PathBuf,
    state: Mutex<ConfigCacheState>,
}

static CONFIG_ORCHESTRATOR: LazyLock<Arc<ConfigOrchestrator>> =
    LazyLock::new(|| Arc::new(ConfigOrchestrator::new(Config::get_config_path())));

impl ConfigOrchestrator {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: Mutex::new(ConfigCacheState::default()),
        }
    }

    /// The process-wide orchestrator for the platform config file
    pub fn global() -> Arc<ConfigOrchestrator> {
        Arc::clone(&CONFIG_ORCHESTRATOR)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_with_cache(&self) -> Result<Config, Box<dyn StdError>> {
        let mut state = self.lock_state();
        self.refresh(&mut state)?;
        Ok(state.config.clone().unwrap_or_default())
    }

    pub fn persist(&self, config: Config) -> Result<(), Box<dyn StdError>> {
        config.save_to_path(&self.path)?;
        let mut state = self.lock_state();
        state.modified = Self::modified_time(&self.path);
        state.config = Some(config);
        Ok(())
    }

    pub fn mutate<F, T>(&self, mutator: F) -> Result<T, Box<dyn StdError>>
    where
        F: FnOnce(&mut Config) -> Result<T, Box<dyn StdError>>,
    {
        let mut working = self.load_with_cache()?;
        let result = mutator(&mut working)?;
        self.persist(working)?;
        Ok(result)
    }

    fn refresh(&self, state: &mut ConfigCacheState) -> Result<(), Box<dyn StdError>> {
        let disk_modified = Self::modified_time(&self.path);
        if state.config.is_none() || state.modified != disk_modified {
            let config = Config::load_from_path(&self.path)?;
            state.modified = disk_modified;
            state.config = Some(config);
        }
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, ConfigCacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        fs::metadata(path).ok()?.modified().ok()
    }
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn StdError>> {
        CONFIG_ORCHESTRATOR.load_with_cache()
    }

    pub fn mutate<F, T>(mutator: F) -> Result<T, Box<dyn StdError>>
    where
        F: FnOnce(&mut Config) -> Result<T, Box<dyn StdError>>,
    {
        CONFIG_ORCHESTRATOR.mutate(mutator)
    }
}
