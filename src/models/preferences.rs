//! Appearance preference values
//!
//! Each enum has a stable lowercase/camelCase string form that is what the
//! preference store holds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a stored or user-supplied preference value is unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreferenceValue {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownPreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown value '{}' for {}", self.value, self.key)
    }
}

impl std::error::Error for UnknownPreferenceValue {}

/// Generates the string conversions shared by all preference enums
macro_rules! preference_enum {
    ($name:ident, $key:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Store key this value lives under
            pub const KEY: &'static str = $key;

            /// All values in display order
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// Stored string form
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownPreferenceValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownPreferenceValue {
                        key: $key,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the operating system setting
    System,
}

preference_enum!(Theme, "theme", {
    Light => "light",
    Dark => "dark",
    System => "system",
});

/// Content density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    Compact,
    Minimal,
}

preference_enum!(Layout, "layout", {
    Default => "default",
    Compact => "compact",
    Minimal => "minimal",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    #[default]
    Left,
    Right,
}

preference_enum!(SidebarPosition, "sidebarPosition", {
    Left => "left",
    Right => "right",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPosition {
    #[default]
    Top,
    Hidden,
}

preference_enum!(HeaderPosition, "headerPosition", {
    Top => "top",
    Hidden => "hidden",
});

/// A named color palette overriding the theme's accent colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTheme {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
}

impl CustomTheme {
    /// Store key for the serialized palette
    pub const KEY: &'static str = "customTheme";

    fn preset(id: &str, name: &str, colors: [&str; 5]) -> Self {
        let [primary, secondary, accent, background, foreground] = colors;
        Self {
            id: id.to_string(),
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            foreground: foreground.to_string(),
        }
    }

    /// Built-in palettes
    pub fn presets() -> Vec<CustomTheme> {
        vec![
            Self::preset(
                "ocean",
                "Ocean Blue",
                ["#0ea5e9", "#06b6d4", "#3b82f6", "#f8fafc", "#0f172a"],
            ),
            Self::preset(
                "forest",
                "Forest Green",
                ["#10b981", "#059669", "#34d399", "#f0fdf4", "#064e3b"],
            ),
            Self::preset(
                "sunset",
                "Sunset Orange",
                ["#f97316", "#ea580c", "#fb923c", "#fffbeb", "#9a3412"],
            ),
        ]
    }

    /// Look up a built-in palette by id (case-insensitive)
    pub fn preset_by_id(id: &str) -> Option<CustomTheme> {
        Self::presets()
            .into_iter()
            .find(|t| t.id.eq_ignore_ascii_case(id.trim()))
    }
}
