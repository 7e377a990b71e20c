//! Preference CLI commands

use clap::Subcommand;

use crate::display::format_preferences;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::CustomTheme;
use crate::preferences::{PreferenceStore, Preferences};

/// Preference subcommands
#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Show current preferences
    Show,

    /// Set a preference (theme, layout, sidebarPosition, headerPosition)
    Set {
        key: String,
        value: String,
    },

    /// Apply a custom color preset (ocean, forest, sunset) or `none`
    Theme {
        preset: String,
    },

    /// Restore all defaults
    Reset,
}

/// Handle a preference command
pub fn handle_prefs_command<S: PreferenceStore>(
    store: &mut S,
    cmd: PrefsCommands,
) -> ExpenseResult<()> {
    let mut prefs = Preferences::load(store);

    match cmd {
        PrefsCommands::Show => {
            print!("{}", format_preferences(&prefs));
        }

        PrefsCommands::Set { key, value } => {
            prefs.set_value(store, &key, &value)?;
            println!("Set {} = {}", key, value.trim());
        }

        PrefsCommands::Theme { preset } => {
            if preset.eq_ignore_ascii_case("none") {
                prefs.set_custom_theme(store, None)?;
                println!("Custom theme cleared");
            } else {
                let theme = CustomTheme::preset_by_id(&preset).ok_or_else(|| {
                    let ids: Vec<String> =
                        CustomTheme::presets().into_iter().map(|t| t.id).collect();
                    ExpenseError::Validation(format!(
                        "Unknown theme preset '{}'. Available: {}, none",
                        preset,
                        ids.join(", ")
                    ))
                })?;
                println!("Applied theme: {}", theme.name);
                prefs.set_custom_theme(store, Some(theme))?;
            }
        }

        PrefsCommands::Reset => {
            prefs.reset(store)?;
            println!("Preferences reset to defaults");
        }
    }

    Ok(())
}
