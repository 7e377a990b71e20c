//! User profile
//!
//! Name, email and notification switches, kept as one JSON value under the
//! `user` key of the preference store. Older values holding only `name` and
//! `email` load with the default notification settings.

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

use super::store::PreferenceStore;

pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_EMAIL: &str = "john@example.com";

/// Notification switches shown on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    EmailNotifications,
    BudgetAlerts,
    WeeklyReports,
    ExpenseReminders,
}

impl Notification {
    pub const ALL: [Notification; 4] = [
        Self::EmailNotifications,
        Self::BudgetAlerts,
        Self::WeeklyReports,
        Self::ExpenseReminders,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email notifications",
            Self::BudgetAlerts => "Budget alerts",
            Self::WeeklyReports => "Weekly reports",
            Self::ExpenseReminders => "Expense reminders",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub budget_alerts: bool,
    pub weekly_reports: bool,
    pub expense_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            budget_alerts: true,
            weekly_reports: false,
            expense_reminders: true,
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, notification: Notification) -> bool {
        match notification {
            Notification::EmailNotifications => self.email_notifications,
            Notification::BudgetAlerts => self.budget_alerts,
            Notification::WeeklyReports => self.weekly_reports,
            Notification::ExpenseReminders => self.expense_reminders,
        }
    }

    pub fn set(&mut self, notification: Notification, enabled: bool) {
        let slot = match notification {
            Notification::EmailNotifications => &mut self.email_notifications,
            Notification::BudgetAlerts => &mut self.budget_alerts,
            Notification::WeeklyReports => &mut self.weekly_reports,
            Notification::ExpenseReminders => &mut self.expense_reminders,
        };
        *slot = enabled;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub notifications: NotificationSettings,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            notifications: NotificationSettings::default(),
        }
    }
}

fn validate_name(name: &str) -> ExpenseResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ExpenseError::Validation("Name cannot be empty".into()));
    }
    Ok(name.to_string())
}

fn validate_email(email: &str) -> ExpenseResult<String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(email.to_string()),
        _ => Err(ExpenseError::Validation(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}

impl Profile {
    /// Store key the profile lives under
    pub const KEY: &'static str = "user";

    /// Read the profile, falling back to defaults for anything missing or blank
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let mut profile = match store.get(Self::KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring stored profile");
                Self::default()
            }),
            None => Self::default(),
        };

        if profile.name.trim().is_empty() {
            profile.name = DEFAULT_NAME.to_string();
        }
        if profile.email.trim().is_empty() {
            profile.email = DEFAULT_EMAIL.to_string();
        }
        profile
    }

    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) -> ExpenseResult<()> {
        store.set(Self::KEY, &serde_json::to_string(self)?)
    }

    /// Change name and/or email; nothing is written unless both are valid
    pub fn update_details<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        name: Option<&str>,
        email: Option<&str>,
    ) -> ExpenseResult<()> {
        if name.is_none() && email.is_none() {
            return Err(ExpenseError::Validation(
                "Nothing to update: pass --name and/or --email".into(),
            ));
        }

        let name = name.map(validate_name).transpose()?;
        let email = email.map(validate_email).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        self.save(store)
    }

    pub fn set_notification<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        notification: Notification,
        enabled: bool,
    ) -> ExpenseResult<()> {
        self.notifications.set(notification, enabled);
        self.save(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{JsonPreferenceStore, MemoryPreferenceStore};
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_store() {
        let profile = Profile::load(&MemoryPreferenceStore::new());
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "john@example.com");
        assert!(profile.notifications.email_notifications);
        assert!(profile.notifications.budget_alerts);
        assert!(!profile.notifications.weekly_reports);
        assert!(profile.notifications.expense_reminders);
    }

    #[test]
    fn test_name_and_email_only_value() {
        let mut store = MemoryPreferenceStore::new();
        store
            .set("user", r#"{"name":"Ada Lovelace","email":"ada@example.org"}"#)
            .unwrap();

        let profile = Profile::load(&store);
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.email, "ada@example.org");
        assert_eq!(profile.notifications, NotificationSettings::default());
    }

    #[test]
    fn test_blank_or_corrupt_values_fall_back() {
        let mut store = MemoryPreferenceStore::new();
        store.set("user", r#"{"name":"","email":"sam@example.com"}"#).unwrap();
        let profile = Profile::load(&store);
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "sam@example.com");

        store.set("user", "{broken").unwrap();
        assert_eq!(Profile::load(&store), Profile::default());
    }

    #[test]
    fn test_round_trip_through_json_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        {
            let mut store = JsonPreferenceStore::open(&path).unwrap();
            let mut profile = Profile::load(&store);
            profile
                .update_details(&mut store, Some("  Grace Hopper "), Some("grace@navy.mil"))
                .unwrap();
            profile
                .set_notification(&mut store, Notification::WeeklyReports, true)
                .unwrap();
            profile
                .set_notification(&mut store, Notification::BudgetAlerts, false)
                .unwrap();
        }

        let store = JsonPreferenceStore::open(&path).unwrap();
        let raw = store.get("user").unwrap();
        assert!(raw.contains("\"weeklyReports\":true"));

        let profile = Profile::load(&store);
        assert_eq!(profile.name, "Grace Hopper");
        assert_eq!(profile.email, "grace@navy.mil");
        assert!(profile.notifications.get(Notification::WeeklyReports));
        assert!(!profile.notifications.get(Notification::BudgetAlerts));
        assert!(profile.notifications.get(Notification::ExpenseReminders));
    }

    #[test]
    fn test_invalid_details_leave_profile_untouched() {
        let mut store = MemoryPreferenceStore::new();
        let mut profile = Profile::load(&store);

        let err = profile
            .update_details(&mut store, Some("Kim"), Some("not-an-email"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(profile
            .update_details(&mut store, Some("   "), None)
            .unwrap_err()
            .is_validation());
        assert!(profile.update_details(&mut store, None, None).is_err());

        assert_eq!(profile, Profile::default());
        assert!(store.is_empty());
    }
}
