//! Expense ledger CLI commands
//!
//! Implements add/list/edit/delete plus stats, CSV import and full dumps.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list, format_stats};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_ledger_json, export_ledger_yaml};
use crate::models::ExpenseCategory;
use crate::services::{ExpenseFilter, ExpenseService, ExpenseUpdate, ImportService};
use crate::storage::Storage;

/// Ledger dump format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DumpFormat {
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Expense ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Record a new expense
    Add {
        /// Amount spent (must be positive)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category (Food, Transportation, Shopping, Utilities, Entertainment,
        /// Healthcare, Education, Travel, Other)
        category: ExpenseCategory,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Optional description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Search description and category
        #[arg(short, long)]
        search: Option<String>,
        /// Only show one category
        #[arg(short, long)]
        category: Option<ExpenseCategory>,
    },

    /// Edit an existing expense
    Edit {
        /// Expense ID (e.g. exp-1a2b3c4d)
        id: String,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        #[arg(short, long)]
        category: Option<ExpenseCategory>,
        #[arg(short, long)]
        date: Option<NaiveDate>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// Show dashboard statistics
    Stats,

    /// Import expenses from CSV (date,amount,category,description)
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Dump the full ledger to a file
    Dump {
        /// Output file path
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: DumpFormat,
    },
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Handle a ledger command
pub fn handle_ledger_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LedgerCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        LedgerCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let expense = service.create(
                amount,
                category,
                date.unwrap_or_else(today),
                description.as_deref().unwrap_or(""),
            )?;
            println!("Expense added successfully!");
            print!("{}", format_expense_details(&expense));
        }

        LedgerCommands::List { search, category } => {
            let expenses = service.list(&ExpenseFilter { search, category })?;
            println!("{}", format_expense_list(&expenses, &settings.date_format));
        }

        LedgerCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let expense = service.update(
                &id,
                ExpenseUpdate {
                    amount,
                    category,
                    date,
                    description,
                },
            )?;
            println!("Expense updated successfully!");
            print!("{}", format_expense_details(&expense));
        }

        LedgerCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!("Expense deleted successfully! ({})", expense.id);
        }

        LedgerCommands::Stats => {
            print!("{}", format_stats(&service.stats(today())?));
        }

        LedgerCommands::Import { file } => {
            let result = ImportService::new(storage).import_file(&file)?;
            println!(
                "Imported {} expense(s) from {}",
                result.imported_count(),
                file.display()
            );
            if !result.errors.is_empty() {
                println!("Skipped {} row(s):", result.errors.len());
                for (row, message) in &result.errors {
                    println!("  row {}: {}", row, message);
                }
            }
        }

        LedgerCommands::Dump { output, format } => {
            let file = File::create(&output).map_err(|e| {
                ExpenseError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);

            match format {
                DumpFormat::Json => export_ledger_json(storage, &mut writer, true)?,
                DumpFormat::Yaml => export_ledger_yaml(storage, &mut writer)?,
            }
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            println!("Ledger exported to: {}", output.display());
        }
    }

    Ok(())
}
