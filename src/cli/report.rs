//! Report CLI commands
//!
//! Shows a report in the terminal or exports it as an artifact.

use std::path::PathBuf;

use chrono::Local;
use clap::{Subcommand, ValueEnum};

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::display::format_report;
use crate::error::ExpenseResult;
use crate::export::{export_report, ReportFormat};
use crate::models::ReportData;
use crate::reports::{demo_report, ledger_report, PERIODS};
use crate::storage::Storage;

/// Where report figures come from
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ReportSource {
    /// Fixed demo dataset
    #[default]
    Demo,
    /// Aggregated from recorded expenses
    Ledger,
}

/// Artifact format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Paginated PDF document
    Pdf,
    /// Sectioned CSV file
    Csv,
    /// Raw figures as JSON
    Json,
    /// Raw figures as YAML
    Yaml,
}

impl From<ExportFormat> for ReportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Pdf => ReportFormat::Pdf,
            ExportFormat::Csv => ReportFormat::Csv,
            ExportFormat::Json => ReportFormat::Json,
            ExportFormat::Yaml => ReportFormat::Yaml,
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show a report in the terminal
    Show {
        /// Period label (1month, 3months, 6months, 1year)
        #[arg(short, long)]
        period: Option<String>,

        #[arg(short, long, value_enum, default_value = "demo")]
        source: ReportSource,
    },

    /// Export a report as expense-report-<period>.<ext>
    Export {
        /// Period label (1month, 3months, 6months, 1year)
        #[arg(short, long)]
        period: Option<String>,

        #[arg(short, long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(short, long, value_enum, default_value = "demo")]
        source: ReportSource,

        /// Directory to write into (defaults to the configured export dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

fn load_report(
    storage: &Storage,
    settings: &Settings,
    source: ReportSource,
    period: &str,
) -> ExpenseResult<ReportData> {
    if !PERIODS.contains(&period) {
        tracing::debug!(period, "Unrecognized period label, using whole ledger");
    }

    Ok(match source {
        ReportSource::Demo => demo_report(period),
        ReportSource::Ledger => {
            let expenses = storage.expenses.get_all()?;
            ledger_report(
                &expenses,
                period,
                Local::now().date_naive(),
                settings.monthly_budget,
            )
        }
    })
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    paths: &ExpensePaths,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Show { period, source } => {
            let period = period.unwrap_or_else(|| settings.default_period.clone());
            let data = load_report(storage, settings, source, &period)?;
            print!("{}", format_report(&data, &period));
        }

        ReportCommands::Export {
            period,
            format,
            source,
            output_dir,
        } => {
            let period = period.unwrap_or_else(|| settings.default_period.clone());
            let data = load_report(storage, settings, source, &period)?;
            let dir = output_dir.unwrap_or_else(|| settings.export_dir(paths));

            let path = export_report(&data, &period, format.into(), &dir)?;
            println!("Report exported to: {}", path.display());
        }
    }

    Ok(())
}
