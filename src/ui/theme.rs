use ratatui::crossterm::style::Color;
use tracing::debug;

use crate::core::config::PreferenceStore;
use crate::core::constants::THEME_PREFERENCE_KEY;
use crate::ui::appearance::{detect_preferred_appearance, Appearance};

/// Terminal palette for the chat loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub user_prefix: Color,
    pub user_text: Color,
    pub ai_prefix: Color,
    pub ai_text: Color,
    pub info: Color,
    pub error: Color,
    pub prompt: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            user_prefix: Color::Cyan,
            user_text: Color::Cyan,
            ai_prefix: Color::Magenta,
            ai_text: Color::White,
            info: Color::DarkGrey,
            error: Color::Red,
            prompt: Color::Yellow,
        }
    }

    pub fn light() -> Self {
        Theme {
            user_prefix: Color::Blue,
            user_text: Color::DarkBlue,
            ai_prefix: Color::DarkMagenta,
            ai_text: Color::Black,
            info: Color::Grey,
            error: Color::DarkRed,
            prompt: Color::DarkYellow,
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}

/// Dark/light display preference.
///
/// Changing the mode re-resolves the active [`Theme`] immediately; writing
/// it to the preference store only happens on [`ThemeStore::save_theme`].
pub struct ThemeStore {
    is_dark: bool,
    palette: Theme,
    preferences: Box<dyn PreferenceStore>,
    detect_system: fn() -> Option<Appearance>,
}

impl ThemeStore {
    pub fn new(preferences: Box<dyn PreferenceStore>) -> Self {
        Self::with_system_detector(preferences, detect_preferred_appearance)
    }

    pub fn with_system_detector(
        preferences: Box<dyn PreferenceStore>,
        detect_system: fn() -> Option<Appearance>,
    ) -> Self {
        Self {
            is_dark: false,
            palette: Theme::light(),
            preferences,
            detect_system,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn appearance(&self) -> Appearance {
        if self.is_dark {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }

    pub fn palette(&self) -> &Theme {
        &self.palette
    }

    /// Settle the startup mode. A persisted preference wins; otherwise the
    /// OS preference is used, and light when that cannot be detected.
    pub fn init_theme(&mut self) {
        match self.preferences.get(THEME_PREFERENCE_KEY) {
            Some(saved) => {
                debug!(saved = %saved, "using persisted theme");
                self.set_theme(saved == "dark");
            }
            None => {
                let prefers_dark = (self.detect_system)() == Some(Appearance::Dark);
                debug!(prefers_dark, "no persisted theme, following system");
                self.set_theme(prefers_dark);
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.is_dark = !self.is_dark;
        self.apply();
    }

    pub fn set_theme(&mut self, dark: bool) {
        self.is_dark = dark;
        self.apply();
    }

    /// Persist the current mode as `"dark"` or `"light"`.
    pub fn save_theme(&mut self) {
        let value = if self.is_dark { "dark" } else { "light" };
        self.preferences.set(THEME_PREFERENCE_KEY, value);
    }

    fn apply(&mut self) {
        self.palette = Theme::for_appearance(self.appearance());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MemoryPreferences;
    use std::sync::{Arc, Mutex};

    /// Preference store whose contents stay inspectable after being boxed.
    #[derive(Clone, Default)]
    struct SharedPreferences(Arc<Mutex<MemoryPreferences>>);

    impl PreferenceStore for SharedPreferences {
        fn get(&self, key: &str) -> Option<String> {
            self.0.lock().unwrap().get(key)
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.lock().unwrap().set(key, value);
        }
    }

    fn system_dark() -> Option<Appearance> {
        Some(Appearance::Dark)
    }

    fn system_light() -> Option<Appearance> {
        Some(Appearance::Light)
    }

    fn system_unknown() -> Option<Appearance> {
        None
    }

    #[test]
    fn persisted_preference_beats_system() {
        let prefs = MemoryPreferences::new().with("theme", "light");
        let mut store = ThemeStore::with_system_detector(Box::new(prefs), system_dark);

        store.init_theme();

        assert!(!store.is_dark());
        assert_eq!(store.palette(), &Theme::light());
    }

    #[test]
    fn persisted_dark_is_adopted() {
        let prefs = MemoryPreferences::new().with("theme", "dark");
        let mut store = ThemeStore::with_system_detector(Box::new(prefs), system_light);

        store.init_theme();

        assert!(store.is_dark());
        assert_eq!(store.palette(), &Theme::dark());
    }

    #[test]
    fn system_preference_used_when_nothing_persisted() {
        let mut store =
            ThemeStore::with_system_detector(Box::new(MemoryPreferences::new()), system_dark);
        store.init_theme();
        assert!(store.is_dark());

        let mut store =
            ThemeStore::with_system_detector(Box::new(MemoryPreferences::new()), system_unknown);
        store.init_theme();
        assert!(!store.is_dark());
    }

    #[test]
    fn toggle_applies_palette_without_persisting() {
        let shared = SharedPreferences::default();
        let mut store = ThemeStore::with_system_detector(Box::new(shared.clone()), system_light);
        store.init_theme();

        store.toggle_theme();

        assert!(store.is_dark());
        assert_eq!(store.palette(), &Theme::dark());
        assert_eq!(shared.get("theme"), None);
    }

    #[test]
    fn save_writes_literal_mode() {
        let shared = SharedPreferences::default();
        let mut store = ThemeStore::with_system_detector(Box::new(shared.clone()), system_light);

        store.set_theme(true);
        store.save_theme();
        assert_eq!(shared.get("theme").as_deref(), Some("dark"));

        store.toggle_theme();
        store.save_theme();
        assert_eq!(shared.get("theme").as_deref(), Some("light"));
    }
}
