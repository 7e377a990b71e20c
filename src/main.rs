use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_ledger_command, handle_prefs_command, handle_profile_command, handle_report_command,
    LedgerCommands, PrefsCommands, ProfileCommands, ReportCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::export::format_currency;
use expense_tracker::logging::init_tracing;
use expense_tracker::preferences::JsonPreferenceStore;
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track expenses and export spending reports",
    long_about = "Record expenses from the command line, review spending trends \
                  by month, category and week, and export reports as PDF or CSV."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed the ledger with sample expenses if it is empty
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Appearance preferences
    #[command(subcommand, alias = "preferences")]
    Prefs(PrefsCommands),

    /// Profile and notification settings
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    if cli.demo {
        let added = ExpenseService::new(&storage).seed_demo()?;
        if added > 0 {
            println!("Added {} demo expenses", added);
        }
    }

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &paths, &settings, cmd)?;
        }
        Some(Commands::Prefs(cmd)) => {
            let mut store = JsonPreferenceStore::open(paths.preferences_file())?;
            handle_prefs_command(&mut store, cmd)?;
        }
        Some(Commands::Profile(cmd)) => {
            let mut store = JsonPreferenceStore::open(paths.preferences_file())?;
            handle_profile_command(&mut store, &storage, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Preferences file:  {}", paths.preferences_file().display());
            println!("Expenses file:     {}", paths.expenses_file().display());
            println!("Export directory:  {}", settings.export_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Default period:  {}", settings.default_period);
            println!("  Monthly budget:  {}", format_currency(settings.monthly_budget));
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("Expense Tracker - track spending and export reports");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense report show' to see the spending report.");
        }
    }

    Ok(())
}
