//! Bundle import stages
//!
//! An import runs as one sequential pass over a parsed bundle:
//!
//! 1. [`format`] decides whether the file is a bundle or a bare expense
//!    array and fails the whole run if there is no expense array.
//! 2. [`references`] merges categories, then payment methods, into the store
//!    by `nombre`, producing a typed [`remap::IdRemap`] per kind.
//! 3. [`validate`] checks each raw expense without touching the store.
//! 4. [`expenses`] resolves references through the remaps, checks that they
//!    exist, and persists the expense.
//!
//! Per-record failures never stop the run; they land in the
//! [`report::ImportReport`] ledger. The orchestration lives in
//! [`crate::services::ImportService`].

pub mod expenses;
pub mod format;
pub mod progress;
pub mod references;
pub mod remap;
pub mod report;
pub mod validate;

pub use format::{detect_format, parse_bundle, BundleShape, ImportBundle};
pub use progress::{ImportPlan, ImportStage, NoProgress, Progress, ProgressObserver};
pub use remap::{CategoryRemap, IdRemap, PaymentMethodRemap};
pub use report::{EntityKind, ImportIssue, ImportReport, ImportSummary, IssueReason};
pub use validate::{parse_expense, validate_expense, ExpenseInput, Violation};

use crate::models::{Category, Expense, PaymentMethod};
use crate::storage::{Collection, Storage};

/// The three collections an import writes to
pub trait ImportStore {
    fn categories(&self) -> &dyn Collection<Category>;
    fn payment_methods(&self) -> &dyn Collection<PaymentMethod>;
    fn expenses(&self) -> &dyn Collection<Expense>;
}

impl ImportStore for Storage {
    fn categories(&self) -> &dyn Collection<Category> {
        &self.categories
    }

    fn payment_methods(&self) -> &dyn Collection<PaymentMethod> {
        &self.payment_methods
    }

    fn expenses(&self) -> &dyn Collection<Expense> {
        &self.expenses
    }
}
