//! Report export
//!
//! Turns report figures into downloadable artifacts:
//! - PDF: paginated document with one table per section
//! - CSV: spreadsheet-compatible sectioned file
//! - JSON / YAML: raw figures plus summary, for other tools
//!
//! Every artifact is named `expense-report-<period>.<ext>`.

pub mod csv;
pub mod format;
pub mod json;
pub mod pdf;
pub mod sections;
pub mod yaml;

pub use self::csv::write_report_csv;
pub use format::{format_currency, format_percentage};
pub use json::{
    export_ledger_json, export_report_json, LedgerExport, ReportExport, EXPORT_SCHEMA_VERSION,
};
pub use pdf::write_report_pdf;
pub use sections::{report_sections, ReportSection};
pub use yaml::{export_ledger_yaml, export_report_yaml};

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ReportData;

/// Prefix shared by every report artifact name
pub const ARTIFACT_PREFIX: &str = "expense-report";

/// Output format of a report artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Pdf,
    Csv,
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Name of the artifact for a period, e.g. `expense-report-6months.pdf`
///
/// The period is used verbatim; labels that would escape the target
/// directory are rejected.
pub fn artifact_file_name(period: &str, format: ReportFormat) -> ExpenseResult<String> {
    if period.contains(['/', '\\']) || period == "." || period == ".." {
        return Err(ExpenseError::Validation(format!(
            "Period '{}' cannot be used in a file name",
            period
        )));
    }

    Ok(format!("{}-{}.{}", ARTIFACT_PREFIX, period, format.extension()))
}

/// Render a report in the given format into a writer
pub fn render_report<W: Write>(
    data: &ReportData,
    period: &str,
    format: ReportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ReportFormat::Pdf => write_report_pdf(data, period, writer),
        ReportFormat::Csv => write_report_csv(data, period, writer),
        ReportFormat::Json => export_report_json(data, period, writer, true),
        ReportFormat::Yaml => export_report_yaml(data, period, writer),
    }
}

/// Write a report artifact into `dir` and return its path
///
/// The directory is created if missing. An existing file with the same name
/// is replaced.
pub fn export_report(
    data: &ReportData,
    period: &str,
    format: ReportFormat,
    dir: &Path,
) -> ExpenseResult<PathBuf> {
    let file_name = artifact_file_name(period, format)?;
    std::fs::create_dir_all(dir).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let path = dir.join(file_name);
    let file = File::create(&path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    render_report(data, period, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    tracing::info!(path = %path.display(), %format, "Exported report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryShare, MonthlyTrend, WeeklySpending};
    use tempfile::TempDir;

    fn sample_data() -> ReportData {
        ReportData {
            monthly_trend: vec![MonthlyTrend::new("Jan", 1200.0, 1500.0)],
            category_breakdown: vec![CategoryShare::new("Shopping", 280.0, 20.0)],
            weekly_spending: vec![WeeklySpending::new("Week 1", 280.0)],
            insights: vec![],
        }
    }

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(
            artifact_file_name("6months", ReportFormat::Pdf).unwrap(),
            "expense-report-6months.pdf"
        );
        assert_eq!(
            artifact_file_name("", ReportFormat::Csv).unwrap(),
            "expense-report-.csv"
        );
        assert!(artifact_file_name("../x", ReportFormat::Csv)
            .unwrap_err()
            .is_validation());
        assert!(artifact_file_name("a\\b", ReportFormat::Pdf).is_err());
    }

    #[test]
    fn test_export_report_writes_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("exports");

        let path = export_report(&sample_data(), "1month", ReportFormat::Csv, &dir).unwrap();
        assert_eq!(path, dir.join("expense-report-1month.csv"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Expense Report\nPeriod: 1month\n"));
        assert!(content.contains("Jan,$1200.00,$1500.00,$-300.00"));
    }

    #[test]
    fn test_export_report_pdf() {
        let temp_dir = TempDir::new().unwrap();

        let path =
            export_report(&sample_data(), "3months", ReportFormat::Pdf, temp_dir.path()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_export_same_period_replaces_file() {
        let temp_dir = TempDir::new().unwrap();
        let first =
            export_report(&sample_data(), "6months", ReportFormat::Csv, temp_dir.path()).unwrap();
        let second =
            export_report(&ReportData::default(), "6months", ReportFormat::Csv, temp_dir.path())
                .unwrap();

        assert_eq!(first, second);
        let content = std::fs::read_to_string(&second).unwrap();
        assert!(!content.contains("Jan"));
    }
}
