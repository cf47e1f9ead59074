//! Expense stage: validate, resolve references, check they exist, persist
//!
//! Every entry is attempted exactly once; a failure only affects its own
//! entry. Expenses are never matched against existing rows, so importing the
//! same entries twice stores them twice.

use serde_json::{Number, Value};

use crate::models::{CategoryId, Expense, ExpenseId, PaymentMethodId};

use super::progress::{ImportStage, ProgressTracker};
use super::remap::{CategoryRemap, IdRemap, PaymentMethodRemap};
use super::report::{EntityKind, ImportIssue, IssueReason};
use super::validate::{parse_expense, ExpenseInput};
use super::ImportStore;

/// What the expense stage did
#[derive(Debug, Default)]
pub struct ExpenseOutcome {
    pub success: usize,
    pub errors: usize,
    /// Ids of persisted expenses, in input order
    pub created: Vec<ExpenseId>,
    pub issues: Vec<ImportIssue>,
}

/// Import every raw expense in `entries`
pub fn import_expenses(
    store: &dyn ImportStore,
    entries: &[Value],
    category_remap: &CategoryRemap,
    payment_method_remap: &PaymentMethodRemap,
) -> ExpenseOutcome {
    import_expenses_tracked(store, entries, category_remap, payment_method_remap, None)
}

pub(crate) fn import_expenses_tracked(
    store: &dyn ImportStore,
    entries: &[Value],
    category_remap: &CategoryRemap,
    payment_method_remap: &PaymentMethodRemap,
    mut tracker: Option<&mut ProgressTracker<'_>>,
) -> ExpenseOutcome {
    let mut outcome = ExpenseOutcome::default();

    for (index, raw) in entries.iter().enumerate() {
        match import_one(store, raw, category_remap, payment_method_remap) {
            Ok(id) => {
                outcome.success += 1;
                outcome.created.push(id);
            }
            Err(reasons) => {
                outcome.errors += 1;
                outcome.issues.push(ImportIssue {
                    kind: EntityKind::Expense,
                    index,
                    name: None,
                    reasons,
                });
            }
        }

        if let Some(tracker) = tracker.as_deref_mut() {
            tracker.advance(ImportStage::Expenses);
        }
    }

    outcome
}

fn import_one(
    store: &dyn ImportStore,
    raw: &Value,
    category_remap: &CategoryRemap,
    payment_method_remap: &PaymentMethodRemap,
) -> Result<ExpenseId, Vec<IssueReason>> {
    let input = parse_expense(raw)
        .map_err(|violations| violations.into_iter().map(IssueReason::Invalid).collect::<Vec<_>>())?;

    let category_id = resolve(&input.category_ref, category_remap);
    let payment_method_id = resolve(&input.payment_method_ref, payment_method_remap);

    let (category_id, payment_method_id) =
        check_references(store, &input, category_id, payment_method_id)?;

    let expense = Expense::new(
        input.name,
        input.description,
        input.amount,
        input.date,
        category_id,
        payment_method_id,
        input.status,
    );

    store
        .expenses()
        .insert(expense)
        .map_err(|e| vec![IssueReason::StoreFailed(e.to_string())])
}

/// Integer value of a JSON number, accepting `3.0` as `3`
fn integral(number: &Number) -> Option<u64> {
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v < u64::MAX as f64)
            .map(|v| v as u64)
    })
}

/// Apply the remap; non-integral references cannot name any row
fn resolve<I: Copy + From<u64>>(reference: &Number, remap: &IdRemap<I>) -> Option<I> {
    integral(reference).map(|raw| remap.resolve(raw))
}

fn check_references(
    store: &dyn ImportStore,
    input: &ExpenseInput,
    category_id: Option<CategoryId>,
    payment_method_id: Option<PaymentMethodId>,
) -> Result<(CategoryId, PaymentMethodId), Vec<IssueReason>> {
    let category = match category_id {
        Some(id) => store.categories().get(id).map(|row| row.map(|_| id)),
        None => Ok(None),
    };
    let payment_method = match payment_method_id {
        Some(id) => store.payment_methods().get(id).map(|row| row.map(|_| id)),
        None => Ok(None),
    };

    let (category, payment_method) = match (category, payment_method) {
        (Ok(category), Ok(payment_method)) => (category, payment_method),
        _ => return Err(vec![IssueReason::LookupFailed]),
    };

    match (category, payment_method) {
        (Some(category), Some(payment_method)) => Ok((category, payment_method)),
        (category, payment_method) => {
            let mut reasons = Vec::new();
            if category.is_none() {
                reasons.push(IssueReason::MissingCategory(display_ref(
                    category_id,
                    &input.category_ref,
                )));
            }
            if payment_method.is_none() {
                reasons.push(IssueReason::MissingPaymentMethod(display_ref(
                    payment_method_id,
                    &input.payment_method_ref,
                )));
            }
            Err(reasons)
        }
    }
}

fn display_ref<I: std::fmt::Display>(resolved: Option<I>, raw: &Number) -> String {
    match resolved {
        Some(id) => id.to_string(),
        None => raw.to_string(),
    }
}
