//! Display formatting for terminal output
//!
//! Tables for the stored collections and the text summary of an import run.

pub mod category;
pub mod expense;
pub mod import;

pub use category::{
    format_category_details, format_category_list, format_payment_method_details,
    format_payment_method_list,
};
pub use expense::{format_expense_details, format_expense_list};
pub use import::format_import_summary;
