//! Expense listing service
//!
//! Expenses only enter the store through imports; this service reads them
//! back with their category and payment method names resolved.

use std::collections::HashMap;

use crate::error::{GastosError, GastosResult};
use crate::models::{CategoryId, Expense, ExpenseId, PaymentMethodId};
use crate::storage::{Collection, Storage};

/// An expense with its references resolved to names
#[derive(Debug, Clone)]
pub struct ExpenseDetail {
    pub expense: Expense,
    /// `None` when the category row no longer exists
    pub category_name: Option<String>,
    pub payment_method_name: Option<String>,
}

/// Service for reading expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// One expense with its references resolved
    pub fn detail(&self, id: ExpenseId) -> GastosResult<ExpenseDetail> {
        let expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| GastosError::expense_not_found(id.to_string()))?;

        Ok(ExpenseDetail {
            category_name: self
                .storage
                .categories
                .get(expense.category_id)?
                .map(|c| c.name),
            payment_method_name: self
                .storage
                .payment_methods
                .get(expense.payment_method_id)?
                .map(|m| m.name),
            expense,
        })
    }

    /// Expenses newest first, optionally truncated to `limit`
    pub fn list(&self, limit: Option<usize>) -> GastosResult<Vec<ExpenseDetail>> {
        let categories: HashMap<CategoryId, String> = self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let methods: HashMap<PaymentMethodId, String> = self
            .storage
            .payment_methods
            .get_all()?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        let mut expenses = self.storage.expenses.get_all()?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        if let Some(limit) = limit {
            expenses.truncate(limit);
        }

        Ok(expenses
            .into_iter()
            .map(|expense| ExpenseDetail {
                category_name: categories.get(&expense.category_id).cloned(),
                payment_method_name: methods.get(&expense.payment_method_id).cloned(),
                expense,
            })
            .collect())
    }

    /// Sum of every stored amount
    pub fn total_amount(&self) -> GastosResult<f64> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .iter()
            .map(|e| e.amount)
            .sum())
    }
}
