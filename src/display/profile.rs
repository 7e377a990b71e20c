//! Profile display formatting

use crate::export::format_currency;
use crate::preferences::{Notification, Profile};

use super::separator;

/// Format the profile with budget and ledger totals
pub fn format_profile(
    profile: &Profile,
    monthly_budget: f64,
    total_spent: f64,
    expense_count: usize,
) -> String {
    let mut output = String::new();

    output.push_str("Profile\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("{:<16} {}\n", "Name:", profile.name));
    output.push_str(&format!("{:<16} {}\n", "Email:", profile.email));
    output.push_str(&format!(
        "{:<16} {}\n",
        "Monthly budget:",
        format_currency(monthly_budget)
    ));
    output.push_str(&format!(
        "{:<16} {} ({} recorded)\n",
        "Total expenses:",
        format_currency(total_spent),
        expense_count
    ));

    output.push_str("\nNotifications\n");
    for notification in Notification::ALL {
        let state = if profile.notifications.get(notification) {
            "on"
        } else {
            "off"
        };
        output.push_str(&format!("  {:<22} {}\n", notification.label(), state));
    }

    output
}
