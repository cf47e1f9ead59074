//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod example;
pub mod expense;
pub mod export;
pub mod import;
pub mod method;
pub mod reset;

pub use category::{handle_category_command, CategoryCommands};
pub use example::handle_example_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use import::handle_import_command;
pub use method::{handle_method_command, MethodCommands};
pub use reset::handle_reset_command;
