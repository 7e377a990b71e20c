//! Reports module
//!
//! Produces the figures behind the reports view, either the fixed demo
//! dataset or an aggregation of the recorded ledger, plus headline metrics.

pub mod demo;
pub mod ledger;
pub mod summary;

pub use demo::{demo_expenses, demo_report, DEMO_MONTHLY_BUDGET};
pub use ledger::{ledger_report, period_months, PERIODS};
pub use summary::ReportSummary;
