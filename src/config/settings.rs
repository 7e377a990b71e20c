//! User settings for the expense tracker
//!
//! Manages user preferences that affect reporting: the default report period,
//! the monthly budget used when aggregating the ledger, and where exports go.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Report period used when none is given on the command line
    #[serde(default = "default_period")]
    pub default_period: String,

    /// Budget applied to every month when building a report from the ledger
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: f64,

    /// Directory for exported reports; falls back to `<base>/exports`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_period() -> String {
    "6months".to_string()
}

fn default_monthly_budget() -> f64 {
    1500.0
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_period: default_period(),
            monthly_budget: default_monthly_budget(),
            export_dir: None,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the export directory against the data paths
    pub fn export_dir(&self, paths: &ExpensePaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.exports_dir())
    }
}
