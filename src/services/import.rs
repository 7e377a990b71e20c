//! CSV import service
//!
//! Imports expenses from a CSV file with the header
//! `date,amount,category,description`. Rows that fail to parse or validate
//! are skipped and reported; the rest are saved in one write.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, ExpenseValidationError};
use crate::storage::Storage;

/// Date formats accepted in the `date` column, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    amount: String,
    category: String,
    #[serde(default)]
    description: String,
}

/// Outcome of an import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// IDs of imported expenses, in file order
    pub imported: Vec<ExpenseId>,
    /// Error message by 1-based data row number
    pub errors: BTreeMap<usize, String>,
}

impl ImportResult {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import expenses from a CSV file
    pub fn import_file(&self, path: &Path) -> ExpenseResult<ImportResult> {
        let file = File::open(path).map_err(|e| {
            ExpenseError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_reader(file)
    }

    /// Import expenses from any CSV reader
    pub fn import_reader<R: Read>(&self, reader: R) -> ExpenseResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| ExpenseError::Import(format!("Failed to read CSV header: {}", e)))?;
        for required in ["date", "amount", "category"] {
            if !headers.iter().any(|h| h.eq_ignore_ascii_case(required)) {
                return Err(ExpenseError::Import(format!(
                    "Missing '{}' column. Expected header: date,amount,category,description",
                    required
                )));
            }
        }
        let normalized: csv::StringRecord =
            headers.iter().map(|h| h.to_lowercase()).collect();
        reader.set_headers(normalized);

        let mut result = ImportResult::default();

        for (idx, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row_number = idx + 1;
            let parsed = row
                .map_err(|e| format!("Error reading CSV record: {}", e))
                .and_then(parse_row);

            match parsed {
                Ok(expense) => {
                    result.imported.push(expense.id);
                    self.storage.expenses.upsert(expense)?;
                }
                Err(message) => {
                    tracing::warn!(row = row_number, %message, "Skipping CSV row");
                    result.errors.insert(row_number, message);
                }
            }
        }

        if !result.imported.is_empty() {
            self.storage.expenses.save()?;
        }

        tracing::info!(
            imported = result.imported.len(),
            skipped = result.errors.len(),
            "CSV import finished"
        );
        Ok(result)
    }
}

fn parse_row(row: CsvRow) -> Result<Expense, String> {
    let date = parse_date(&row.date)?;
    let amount = parse_amount(&row.amount)?;
    let category: ExpenseCategory = row
        .category
        .parse()
        .map_err(|e: ExpenseValidationError| e.to_string())?;

    let expense = Expense::new(amount, category, date, row.description);
    expense.validate().map_err(|e| e.to_string())?;
    Ok(expense)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("Invalid date '{}'", s))
}

/// Parse an amount, tolerating a leading `$` and thousands separators
fn parse_amount(s: &str) -> Result<f64, String> {
    let cleaned: String = s
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("Invalid amount '{}'", s))
}
