//! Theme mode plus shared Tailwind class constants to ensure visual
//! consistency across the application.

use super::errors::AppError;
use super::session::KeyValueStore;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_name(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

/// Persisted light/dark preference, stored next to the session keys.
pub struct ThemeStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Saved preference, light when nothing was saved yet.
    pub fn load(&self) -> ThemeMode {
        self.storage
            .get(THEME_KEY)
            .map_or_else(ThemeMode::default, |value| ThemeMode::from_name(&value))
    }

    pub fn save(&self, mode: ThemeMode) -> Result<(), AppError> {
        self.storage.set(THEME_KEY, mode.as_str())
    }
}

pub struct Theme;

impl Theme {
    /// Standard text input.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Label paired with `INPUT`.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Inline field error below an input.
    pub const FIELD_ERROR: &'static str = "mt-1 text-xs text-red-600 dark:text-red-400";

    /// Bordered card used by forms and admin panels.
    pub const CARD: &'static str = "rounded-lg border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800";

    /// Page heading.
    pub const HEADING: &'static str = "text-2xl font-semibold text-gray-900 dark:text-white";

    /// Table header cell.
    pub const TH: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Container for a row that reacts to hover signaling its children (via the `group` class).
    pub const ROW: &'static str = "px-6 py-4 group transition-colors";

    /// Text link.
    pub const LINK: &'static str = "text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300";
}

#[cfg(test)]
mod tests {
    use super::{THEME_KEY, ThemeMode, ThemeStore};
    use crate::app_lib::session::{KeyValueStore, MemoryStorage};

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn from_name_defaults_to_light() {
        assert_eq!(ThemeMode::from_name(" DARK "), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_name("sepia"), ThemeMode::Light);
    }

    #[test]
    fn theme_store_persists_under_theme_key() {
        let storage = MemoryStorage::default();
        let store = ThemeStore::new(storage.clone());
        assert_eq!(store.load(), ThemeMode::Light);

        assert!(store.save(ThemeMode::Dark).is_ok());
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(ThemeStore::new(storage).load(), ThemeMode::Dark);
    }
}
