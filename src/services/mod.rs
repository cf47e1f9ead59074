//! Service layer for gastos
//!
//! The service layer provides business logic on top of the storage layer:
//! validation and duplicate checks for manual edits, the bundle importer,
//! and the example generator.

pub mod category;
pub mod example;
pub mod expense;
pub mod import;
pub mod payment_method;

pub use category::CategoryService;
pub use example::ExampleGenerator;
pub use expense::{ExpenseDetail, ExpenseService};
pub use import::ImportService;
pub use payment_method::PaymentMethodService;
