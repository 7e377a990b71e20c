//! Core data models for the expense tracker
//!
//! Expenses recorded in the ledger, the aggregated report data fed to the
//! exporters, and the appearance preference values.

pub mod expense;
pub mod ids;
pub mod preferences;
pub mod report;

pub use expense::{Expense, ExpenseCategory, ExpenseValidationError};
pub use ids::ExpenseId;
pub use preferences::{CustomTheme, HeaderPosition, Layout, SidebarPosition, Theme};
pub use report::{CategoryShare, Insight, InsightKind, MonthlyTrend, ReportData, WeeklySpending};
