//! Light/dark theme preference.
//!
//! The applied mode is owned by [`ThemeController`]; the root `dark` class
//! is rendered from it. Storage is written on every change and read exactly
//! once, at initialization.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::storage::PreferenceStore;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Class added to the root element.
    pub fn root_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK_CLASS,
            ThemeMode::Light => "",
        }
    }

    /// Glyph on the toggle control: shows the mode a click switches to.
    pub fn glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀️",
            ThemeMode::Light => "🌙",
        }
    }

    /// Dictionary key of the toggle control's tooltip.
    pub fn tooltip_key(self) -> &'static str {
        match self {
            ThemeMode::Dark => "theme-to-light",
            ThemeMode::Light => "theme-to-dark",
        }
    }
}

pub struct ThemeController {
    applied: ThemeMode,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Read the persisted mode, fall back to the environment's color scheme,
    /// then apply (which persists the result).
    pub fn initialize(store: Box<dyn PreferenceStore>, prefers_dark: impl FnOnce() -> bool) -> Self {
        let persisted = match store.get(THEME_STORAGE_KEY) {
            Ok(value) => value.as_deref().and_then(ThemeMode::parse),
            Err(err) => {
                warn!("reading theme preference failed: {err}");
                None
            }
        };
        let mode = persisted.unwrap_or_else(|| {
            if prefers_dark() {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        });

        let mut controller = Self {
            applied: mode,
            store,
        };
        controller.set_theme(mode);
        controller
    }

    pub fn applied(&self) -> ThemeMode {
        self.applied
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.applied = mode;
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, mode.as_str()) {
            warn!("persisting theme preference failed: {err}");
        }
        debug!(mode = mode.as_str(), "theme applied");
    }

    /// Flip the applied mode (never re-reads storage).
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.applied.toggled();
        self.set_theme(next);
        next
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("applied", &self.applied)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    fn stored(store: &MemoryStore) -> Option<String> {
        store.get(THEME_STORAGE_KEY).unwrap()
    }

    #[test]
    fn persisted_value_wins_over_environment() {
        let mut store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "light").unwrap();
        let controller = ThemeController::initialize(Box::new(store), || true);
        assert_eq!(controller.applied(), ThemeMode::Light);
    }

    #[test]
    fn environment_decides_when_nothing_is_persisted() {
        let store = MemoryStore::default();
        let controller = ThemeController::initialize(Box::new(store.clone()), || true);
        assert_eq!(controller.applied(), ThemeMode::Dark);
        assert_eq!(stored(&store).as_deref(), Some("dark"));
    }

    #[test]
    fn garbage_in_storage_falls_back_to_environment() {
        let mut store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "sepia").unwrap();
        let controller = ThemeController::initialize(Box::new(store), || false);
        assert_eq!(controller.applied(), ThemeMode::Light);
    }

    #[test]
    fn double_toggle_is_an_involution() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::initialize(Box::new(store.clone()), || false);
        let class_before = controller.applied().root_class();
        let stored_before = stored(&store);

        controller.toggle();
        assert_eq!(controller.applied().root_class(), DARK_CLASS);
        controller.toggle();

        assert_eq!(controller.applied().root_class(), class_before);
        assert_eq!(stored(&store), stored_before);
    }

    #[test]
    fn toggle_reads_applied_state_not_storage() {
        let mut store = MemoryStore::default();
        let mut controller = ThemeController::initialize(Box::new(store.clone()), || false);
        store.set(THEME_STORAGE_KEY, "dark").unwrap();
        assert_eq!(controller.toggle(), ThemeMode::Dark);
    }

    #[test]
    fn glyph_and_tooltip_point_at_the_other_mode() {
        assert_eq!(ThemeMode::Dark.glyph(), "☀️");
        assert_eq!(ThemeMode::Dark.tooltip_key(), "theme-to-light");
        assert_eq!(ThemeMode::Light.glyph(), "🌙");
        assert_eq!(ThemeMode::Light.tooltip_key(), "theme-to-dark");
    }
}
