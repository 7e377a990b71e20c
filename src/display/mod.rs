//! Display formatting for terminal output
//!
//! Tables are rendered with `tabled`; the helpers here cover bars,
//! separators and truncation.

pub mod expense;
pub mod preferences;
pub mod profile;
pub mod report;

pub use expense::{format_expense_details, format_expense_list, format_stats};
pub use preferences::format_preferences;
pub use profile::format_profile;
pub use report::format_report;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
