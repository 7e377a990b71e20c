//! Appearance preferences
//!
//! `Preferences` is loaded from a [`PreferenceStore`] once at startup and
//! every setter writes the changed key straight back. Unknown or corrupt
//! stored values fall back to the default with a warning.
//!
//! The user [`Profile`] shares the same store under its own key.

pub mod profile;
pub mod store;

pub use profile::{Notification, NotificationSettings, Profile};
pub use store::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};

use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::preferences::UnknownPreferenceValue;
use crate::models::{CustomTheme, HeaderPosition, Layout, SidebarPosition, Theme};

/// Keys accepted by [`Preferences::set_value`]
pub const PREFERENCE_KEYS: [&str; 4] = [
    Theme::KEY,
    Layout::KEY,
    SidebarPosition::KEY,
    HeaderPosition::KEY,
];

/// Current appearance settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub layout: Layout,
    pub sidebar_position: SidebarPosition,
    pub header_position: HeaderPosition,
    pub custom_theme: Option<CustomTheme>,
}

/// Parse a stored value, falling back to the default on anything unknown
fn load_value<T, S>(store: &S, key: &str) -> T
where
    T: FromStr<Err = UnknownPreferenceValue> + Default,
    S: PreferenceStore + ?Sized,
{
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e: UnknownPreferenceValue| {
            tracing::warn!(key, value = %e.value, "Ignoring stored preference");
            T::default()
        }),
        None => T::default(),
    }
}

impl Preferences {
    /// Read all preferences from the store
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let custom_theme = store.get(CustomTheme::KEY).and_then(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| tracing::warn!(error = %e, "Ignoring stored custom theme"))
                .ok()
        });

        Self {
            theme: load_value(store, Theme::KEY),
            layout: load_value(store, Layout::KEY),
            sidebar_position: load_value(store, SidebarPosition::KEY),
            header_position: load_value(store, HeaderPosition::KEY),
            custom_theme,
        }
    }

    /// Write every field to the store
    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> ExpenseResult<()> {
        store.set(Theme::KEY, self.theme.as_str())?;
        store.set(Layout::KEY, self.layout.as_str())?;
        store.set(SidebarPosition::KEY, self.sidebar_position.as_str())?;
        store.set(HeaderPosition::KEY, self.header_position.as_str())?;
        self.write_custom_theme(store)?;
        store.flush()
    }

    pub fn set_theme<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        theme: Theme,
    ) -> ExpenseResult<()> {
        self.theme = theme;
        store.set(Theme::KEY, theme.as_str())
    }

    pub fn set_layout<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        layout: Layout,
    ) -> ExpenseResult<()> {
        self.layout = layout;
        store.set(Layout::KEY, layout.as_str())
    }

    pub fn set_sidebar_position<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        position: SidebarPosition,
    ) -> ExpenseResult<()> {
        self.sidebar_position = position;
        store.set(SidebarPosition::KEY, position.as_str())
    }

    pub fn set_header_position<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        position: HeaderPosition,
    ) -> ExpenseResult<()> {
        self.header_position = position;
        store.set(HeaderPosition::KEY, position.as_str())
    }

    /// Set or clear the custom palette; clearing removes the stored key
    pub fn set_custom_theme<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        theme: Option<CustomTheme>,
    ) -> ExpenseResult<()> {
        self.custom_theme = theme;
        self.write_custom_theme(store)
    }

    fn write_custom_theme<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> ExpenseResult<()> {
        match &self.custom_theme {
            Some(theme) => store.set(CustomTheme::KEY, &serde_json::to_string(theme)?),
            None => store.remove(CustomTheme::KEY),
        }
    }

    /// Set one preference from its key and string value
    pub fn set_value<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        key: &str,
        value: &str,
    ) -> ExpenseResult<()> {
        let invalid = |e: UnknownPreferenceValue| ExpenseError::Validation(e.to_string());

        match key {
            Theme::KEY => self.set_theme(store, value.parse().map_err(invalid)?),
            Layout::KEY => self.set_layout(store, value.parse().map_err(invalid)?),
            SidebarPosition::KEY => {
                self.set_sidebar_position(store, value.parse().map_err(invalid)?)
            }
            HeaderPosition::KEY => {
                self.set_header_position(store, value.parse().map_err(invalid)?)
            }
            _ => Err(ExpenseError::Preferences(format!(
                "Unknown preference '{}'. Valid keys: {}",
                key,
                PREFERENCE_KEYS.join(", ")
            ))),
        }
    }

    /// Restore defaults and remove every stored key
    pub fn reset<S: PreferenceStore + ?Sized>(&mut self, store: &mut S) -> ExpenseResult<()> {
        *self = Self::default();
        for key in PREFERENCE_KEYS.iter().chain([&CustomTheme::KEY]) {
            store.remove(key)?;
        }
        store.flush()
    }

    /// Whether the dark palette applies, given the system preference
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self.theme {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => system_prefers_dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_store() {
        let store = MemoryPreferenceStore::new();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.sidebar_position, SidebarPosition::Left);
        assert!(!prefs.is_dark(true));
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut store = MemoryPreferenceStore::new();
        let mut prefs = Preferences::default();
        prefs.set_theme(&mut store, Theme::Dark).unwrap();
        prefs.set_layout(&mut store, Layout::Minimal).unwrap();
        prefs
            .set_custom_theme(&mut store, CustomTheme::preset_by_id("forest"))
            .unwrap();

        let loaded = Preferences::load(&store);
        assert_eq!(loaded, prefs);
        assert_eq!(loaded.custom_theme.unwrap().primary, "#10b981");
    }

    #[test]
    fn test_unknown_stored_values_fall_back() {
        let mut store = MemoryPreferenceStore::new();
        store.set("theme", "purple").unwrap();
        store.set("layout", "compact").unwrap();
        store.set("customTheme", "{not json").unwrap();

        let prefs = Preferences::load(&store);
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.layout, Layout::Compact);
        assert_eq!(prefs.custom_theme, None);
    }

    #[test]
    fn test_clearing_custom_theme_removes_key() {
        let mut store = MemoryPreferenceStore::new();
        let mut prefs = Preferences::default();
        prefs
            .set_custom_theme(&mut store, CustomTheme::preset_by_id("ocean"))
            .unwrap();
        assert!(store.get("customTheme").is_some());

        prefs.set_custom_theme(&mut store, None).unwrap();
        assert_eq!(store.get("customTheme"), None);
    }

    #[test]
    fn test_set_value_validates() {
        let mut store = MemoryPreferenceStore::new();
        let mut prefs = Preferences::default();

        prefs.set_value(&mut store, "sidebarPosition", "right").unwrap();
        assert_eq!(prefs.sidebar_position, SidebarPosition::Right);
        assert_eq!(store.get("sidebarPosition").as_deref(), Some("right"));

        let err = prefs.set_value(&mut store, "theme", "neon").unwrap_err();
        assert!(err.is_validation());
        assert!(prefs.set_value(&mut store, "fontSize", "12").is_err());
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_reset_clears_store() {
        let mut store = MemoryPreferenceStore::new();
        let mut prefs = Preferences::default();
        prefs.set_theme(&mut store, Theme::System).unwrap();
        prefs
            .set_custom_theme(&mut store, CustomTheme::preset_by_id("sunset"))
            .unwrap();

        prefs.reset(&mut store).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_system_theme_follows_system() {
        let prefs = Preferences {
            theme: Theme::System,
            ..Preferences::default()
        };
        assert!(prefs.is_dark(true));
        assert!(!prefs.is_dark(false));
    }

    #[test]
    fn test_json_store_persists_across_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        {
            let mut store = JsonPreferenceStore::open(&path).unwrap();
            let mut prefs = Preferences::load(&store);
            prefs.set_header_position(&mut store, HeaderPosition::Hidden).unwrap();
        }

        let store = JsonPreferenceStore::open(&path).unwrap();
        assert_eq!(Preferences::load(&store).header_position, HeaderPosition::Hidden);
    }
}
