//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod prefs;
pub mod profile;
pub mod report;

pub use expense::{handle_ledger_command, DumpFormat, LedgerCommands};
pub use prefs::{handle_prefs_command, PrefsCommands};
pub use profile::{handle_profile_command, NotificationArg, ProfileCommands};
pub use report::{handle_report_command, ExportFormat, ReportCommands, ReportSource};
