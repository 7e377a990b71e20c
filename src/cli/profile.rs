//! Profile CLI commands

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::format_profile;
use crate::error::ExpenseResult;
use crate::preferences::{Notification, PreferenceStore, Profile};
use crate::storage::Storage;

/// Notification switch names
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NotificationArg {
    EmailNotifications,
    BudgetAlerts,
    WeeklyReports,
    ExpenseReminders,
}

impl From<NotificationArg> for Notification {
    fn from(arg: NotificationArg) -> Self {
        match arg {
            NotificationArg::EmailNotifications => Notification::EmailNotifications,
            NotificationArg::BudgetAlerts => Notification::BudgetAlerts,
            NotificationArg::WeeklyReports => Notification::WeeklyReports,
            NotificationArg::ExpenseReminders => Notification::ExpenseReminders,
        }
    }
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show profile, budget and notification settings
    Show,

    /// Update name and/or email
    Set {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Turn a notification on or off
    Notify {
        #[arg(value_enum)]
        notification: NotificationArg,
        /// on/off, yes/no, true/false
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
}

/// Handle a profile command
pub fn handle_profile_command<S: PreferenceStore>(
    store: &mut S,
    storage: &Storage,
    settings: &Settings,
    cmd: ProfileCommands,
) -> ExpenseResult<()> {
    let mut profile = Profile::load(store);

    match cmd {
        ProfileCommands::Show => {
            let expenses = storage.expenses.get_all()?;
            let total: f64 = expenses.iter().map(|e| e.amount).sum();
            print!(
                "{}",
                format_profile(&profile, settings.monthly_budget, total, expenses.len())
            );
        }

        ProfileCommands::Set { name, email } => {
            profile.update_details(store, name.as_deref(), email.as_deref())?;
            println!("Profile updated: {} <{}>", profile.name, profile.email);
        }

        ProfileCommands::Notify {
            notification,
            enabled,
        } => {
            let notification = Notification::from(notification);
            profile.set_notification(store, notification, enabled)?;
            println!(
                "{} turned {}",
                notification.label(),
                if enabled { "on" } else { "off" }
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::preferences::MemoryPreferenceStore;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_and_notify_write_user_key() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut store = MemoryPreferenceStore::new();

        handle_profile_command(
            &mut store,
            &storage,
            &settings,
            ProfileCommands::Set {
                name: Some("Jane Smith".into()),
                email: None,
            },
        )
        .unwrap();
        handle_profile_command(
            &mut store,
            &storage,
            &settings,
            ProfileCommands::Notify {
                notification: NotificationArg::ExpenseReminders,
                enabled: false,
            },
        )
        .unwrap();

        let profile = Profile::load(&store);
        assert_eq!(profile.name, "Jane Smith");
        assert_eq!(profile.email, "john@example.com");
        assert!(!profile.notifications.expense_reminders);
        assert!(store.get("user").is_some());
    }

    #[test]
    fn test_show_on_empty_store_writes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let mut store = MemoryPreferenceStore::new();

        handle_profile_command(&mut store, &storage, &Settings::default(), ProfileCommands::Show)
            .unwrap();
        assert!(store.is_empty());
    }
}
