//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::GastosResult;
use crate::models::ExpenseId;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses, newest first
    List {
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Show every expense
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: ExpenseId,
    },
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> GastosResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::List { limit, all } => {
            let expenses = service.list(if all { None } else { Some(limit) })?;
            println!("{}", format_expense_list(&expenses, settings));

            let total = storage.expenses.count()?;
            if expenses.len() < total {
                println!("Showing {} of {} expenses.", expenses.len(), total);
            }
            println!("Total: {}", settings.format_amount(service.total_amount()?));
        }
        ExpenseCommands::Show { id } => {
            print!("{}", format_expense_details(&service.detail(id)?, settings));
        }
    }

    Ok(())
}
