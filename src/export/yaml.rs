//! YAML export functionality
//!
//! Human-readable variants of the JSON dumps, prefixed with a comment header.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::{LedgerExport, ReportExport};
use crate::models::ReportData;
use crate::storage::Storage;
use serde::Serialize;
use std::io::Write;

fn write_yaml<W: Write, T: Serialize>(
    writer: &mut W,
    heading: &str,
    value: &T,
) -> ExpenseResult<()> {
    writeln!(writer, "# {}", heading).map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, value).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Export the figures behind a report to YAML
pub fn export_report_yaml<W: Write>(
    data: &ReportData,
    period: &str,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = ReportExport::new(data, period);
    write_yaml(writer, &format!("Expense Report ({})", period), &export)
}

/// Export the full ledger to YAML
pub fn export_ledger_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ExpenseResult<()> {
    let export = LedgerExport::from_storage(storage)?;
    write_yaml(writer, "Expense Ledger Export", &export)
}
