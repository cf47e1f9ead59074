use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gastos::cli::{
    handle_category_command, handle_example_command, handle_expense_command,
    handle_export_command, handle_import_command, handle_method_command, handle_reset_command,
    ExportFormat,
};
use gastos::config::{paths::GastosPaths, settings::Settings};
use gastos::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Personal expense tracker with bundle import and export",
    long_about = "gastos keeps categories, payment methods and expenses in local JSON \
                  files and imports exported bundles into them, merging categories and \
                  payment methods by name and translating the bundle's ids."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a bundle or a bare expense array from a JSON file
    Import {
        /// Path to the .json file
        file: PathBuf,
        /// Print the result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Export the database
    Export {
        /// Output file (stdout if omitted)
        output: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Write an example bundle with four months of expenses
    Example {
        /// Output file (stdout if omitted)
        output: Option<PathBuf>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Delete every category, payment method and expense
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(gastos::cli::CategoryCommands),

    /// Payment method management commands
    #[command(subcommand)]
    Method(gastos::cli::MethodCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(gastos::cli::ExpenseCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GastosPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Import { file, json }) => {
            handle_import_command(&storage, &file, json)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&storage, output, format, pretty)?;
        }
        Some(Commands::Example { output, seed }) => {
            handle_example_command(output, seed)?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset_command(&storage, yes)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Method(cmd)) => {
            handle_method_command(&storage, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            println!("gastos configuration");
            println!("====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("gastos - personal expense tracker");
            println!();
            println!("Run 'gastos --help' for usage information.");
            println!("Run 'gastos example gastos.json' to create a bundle to import.");
        }
    }

    Ok(())
}
