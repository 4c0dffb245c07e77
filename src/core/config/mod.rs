pub mod data;
pub mod defaults;
pub mod io;
pub mod orchestrator;
pub mod preferences;

pub use data::Config;
pub use orchestrator::ConfigOrchestrator;
pub use preferences::{ConfigPreferences, MemoryPreferences, PreferenceStore};
