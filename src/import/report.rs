//! Result ledger of an import run
//!
//! Failures are kept structured (kind, position, reasons) and only turned
//! into the user-facing strings by their `Display` impls.

use std::fmt;

use serde::Serialize;

use crate::models::{CategoryId, ExpenseId, PaymentMethodId};

use super::validate::Violation;

/// Kind of entry an issue refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    PaymentMethod,
    Expense,
}

impl EntityKind {
    /// Spanish label used in rendered messages
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Category => "categoría",
            EntityKind::PaymentMethod => "método",
            EntityKind::Expense => "gasto",
        }
    }
}

/// Why an entry could not be imported
#[derive(Debug, Clone, PartialEq)]
pub enum IssueReason {
    /// Expense broke a structural rule
    Invalid(Violation),
    /// Resolved category id has no row in the store
    MissingCategory(String),
    /// Resolved payment method id has no row in the store
    MissingPaymentMethod(String),
    /// Reading the referenced rows failed
    LookupFailed,
    /// Reference candidate could not be read or stored
    Rejected(String),
    /// Persisting the expense failed
    StoreFailed(String),
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueReason::Invalid(violation) => write!(f, "{}", violation),
            IssueReason::MissingCategory(id) => write!(f, "Categoría con ID {} no existe", id),
            IssueReason::MissingPaymentMethod(id) => {
                write!(f, "Método de pago con ID {} no existe", id)
            }
            IssueReason::LookupFailed => f.write_str("Error al validar categoría y método de pago"),
            IssueReason::Rejected(cause) | IssueReason::StoreFailed(cause) => f.write_str(cause),
        }
    }
}

/// One failed entry
#[derive(Debug, Clone, PartialEq)]
pub struct ImportIssue {
    pub kind: EntityKind,
    /// Zero-based position in its section of the bundle
    pub index: usize,
    /// `nombre` of a reference candidate, when it had one
    pub name: Option<String>,
    pub reasons: Vec<IssueReason>,
}

impl ImportIssue {
    /// One-based position, as shown to users
    pub fn position(&self) -> usize {
        self.index + 1
    }

    fn joined_reasons(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ImportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntityKind::Category | EntityKind::PaymentMethod => write!(
                f,
                "Error al importar {} \"{}\": {}",
                self.kind.label(),
                self.name.as_deref().unwrap_or_default(),
                self.joined_reasons()
            ),
            EntityKind::Expense => match self.reasons.as_slice() {
                [IssueReason::StoreFailed(cause)] => {
                    write!(f, "Gasto {}: Error al importar - {}", self.position(), cause)
                }
                _ => write!(f, "Gasto {}: {}", self.position(), self.joined_reasons()),
            },
        }
    }
}

/// Outcome of a completed import run
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Number of expense entries in the bundle
    pub total: usize,
    /// Expenses persisted
    pub success: usize,
    /// Expenses that failed
    pub errors: usize,
    /// Every failure, reference candidates included, in processing order
    pub issues: Vec<ImportIssue>,
    pub categories_imported: usize,
    pub payment_methods_imported: usize,
    pub created_category_ids: Vec<CategoryId>,
    pub created_payment_method_ids: Vec<PaymentMethodId>,
    pub created_expense_ids: Vec<ExpenseId>,
}

/// Serializable view of a report using the bundle's field names
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total: usize,
    pub success: usize,
    pub errors: usize,
    pub error_details: Vec<String>,
    pub categorias_importadas: usize,
    pub metodos_importados: usize,
}

impl ImportReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Rendered failure messages, in processing order
    pub fn error_details(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Issues for one entity kind
    pub fn issues_for(&self, kind: EntityKind) -> impl Iterator<Item = &ImportIssue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }

    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            total: self.total,
            success: self.success,
            errors: self.errors,
            error_details: self.error_details(),
            categorias_importadas: self.categories_imported,
            metodos_importados: self.payment_methods_imported,
        }
    }

    /// Lines announcing what was created; empty when nothing was
    pub fn success_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if self.categories_imported > 0 {
            messages.push(format!("{} categorías importadas", self.categories_imported));
        }
        if self.payment_methods_imported > 0 {
            messages.push(format!(
                "{} métodos de pago importados",
                self.payment_methods_imported
            ));
        }
        if self.success > 0 {
            messages.push(format!("{} gastos importados", self.success));
        }
        messages
    }

    /// Line announcing failed expenses, if any failed
    pub fn failure_message(&self) -> Option<String> {
        (self.errors > 0).then(|| format!("{} gastos no pudieron ser importados", self.errors))
    }
}
