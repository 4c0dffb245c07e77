//! Registry of setting handlers.

use super::handlers::{BaseUrlHandler, ExportDirHandler, ThemeHandler};
use super::SettingHandler;

/// Registry of all available setting handlers, in display order.
pub struct SettingRegistry {
    handlers: Vec<Box<dyn SettingHandler>>,
}

impl SettingRegistry {
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(BaseUrlHandler),
                Box::new(ExportDirHandler),
                Box::new(ThemeHandler),
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers
            .iter()
            .find(|handler| handler.key() == key)
            .map(|handler| handler.as_ref())
    }

    pub fn handlers(&self) -> impl Iterator<Item = &dyn SettingHandler> {
        self.handlers.iter().map(|handler| handler.as_ref())
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
