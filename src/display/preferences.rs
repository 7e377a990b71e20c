//! Preference display formatting

use crate::models::{CustomTheme, HeaderPosition, Layout, SidebarPosition, Theme};
use crate::preferences::Preferences;

/// Format current preferences, listing the accepted values for each key
pub fn format_preferences(prefs: &Preferences) -> String {
    fn choices<T: ToString>(values: &[T]) -> String {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:<8} ({})\n",
        Theme::KEY,
        prefs.theme,
        choices(Theme::ALL)
    ));
    output.push_str(&format!(
        "{:<16} {:<8} ({})\n",
        Layout::KEY,
        prefs.layout,
        choices(Layout::ALL)
    ));
    output.push_str(&format!(
        "{:<16} {:<8} ({})\n",
        SidebarPosition::KEY,
        prefs.sidebar_position,
        choices(SidebarPosition::ALL)
    ));
    output.push_str(&format!(
        "{:<16} {:<8} ({})\n",
        HeaderPosition::KEY,
        prefs.header_position,
        choices(HeaderPosition::ALL)
    ));

    let presets: Vec<String> = CustomTheme::presets().into_iter().map(|t| t.id).collect();
    match &prefs.custom_theme {
        Some(theme) => output.push_str(&format!(
            "{:<16} {} ({}, {}, {})\n",
            CustomTheme::KEY,
            theme.name,
            theme.primary,
            theme.secondary,
            theme.accent
        )),
        None => output.push_str(&format!(
            "{:<16} none     ({})\n",
            CustomTheme::KEY,
            presets.join("|")
        )),
    }

    output
}
