//! JSON export functionality
//!
//! Machine-readable dumps with schema versioning: the raw figures behind a
//! report, and the full expense ledger.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ReportData};
use crate::reports::ReportSummary;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Raw report figures for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Period label the figures belong to
    pub period: String,

    /// Key metrics derived from the figures
    pub summary: ReportSummary,

    /// The figures themselves
    pub report: ReportData,
}

impl ReportExport {
    pub fn new(data: &ReportData, period: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            period: period.to_string(),
            summary: ReportSummary::from_report(data),
            report: data.clone(),
        }
    }
}

/// Full expense ledger dump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub expenses: Vec<Expense>,
    pub metadata: LedgerMetadata,
}

/// Ledger metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerMetadata {
    pub expense_count: usize,
    pub total_amount: f64,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl LedgerExport {
    /// Create a ledger export from storage
    pub fn from_storage(storage: &Storage) -> ExpenseResult<Self> {
        let expenses = storage.expenses.get_all()?;

        let metadata = LedgerMetadata {
            expense_count: expenses.len(),
            total_amount: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        })
    }
}

fn write_json<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> ExpenseResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Export the figures behind a report to JSON
pub fn export_report_json<W: Write>(
    data: &ReportData,
    period: &str,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    write_json(writer, &ReportExport::new(data, period), pretty)
}

/// Export the full ledger to JSON
pub fn export_ledger_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    write_json(writer, &LedgerExport::from_storage(storage)?, pretty)
}
