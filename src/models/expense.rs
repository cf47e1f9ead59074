//! Expense model
//!
//! Expenses reference a category and a payment method by id. The date is
//! kept as the `YYYY-MM-DD` text it was recorded with; imports only check
//! the shape of that text, not calendar validity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId, PaymentMethodId};
use super::Record;

/// Known expense states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseStatus {
    Pending,
    Paid,
}

impl ExpenseStatus {
    pub fn all() -> &'static [Self] {
        &[Self::Pending, Self::Paid]
    }

    /// Wire spelling of this state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Paid => "pagado",
        }
    }

    /// Parse the wire spelling; unknown states yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pendiente" => Some(Self::Pending),
            "pagado" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identity
    pub id: ExpenseId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    /// Positive amount
    #[serde(rename = "cantidad")]
    pub amount: f64,

    /// `YYYY-MM-DD`
    #[serde(rename = "fecha")]
    pub date: String,

    #[serde(rename = "categoriaId")]
    pub category_id: CategoryId,

    #[serde(rename = "metodoPagoId")]
    pub payment_method_id: PaymentMethodId,

    /// Usually "pendiente" or "pagado"
    #[serde(rename = "estado")]
    pub status: String,
}

impl Expense {
    /// Create a new, not yet persisted expense
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        category_id: CategoryId,
        payment_method_id: PaymentMethodId,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(0),
            name: name.into(),
            description: description.into(),
            amount,
            date: date.into(),
            category_id,
            payment_method_id,
            status: status.into(),
        }
    }

    /// The date as a calendar date, if it is one
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// The state as a known status, if it is one
    pub fn known_status(&self) -> Option<ExpenseStatus> {
        ExpenseStatus::parse(&self.status)
    }
}

impl Record for Expense {
    type Id = ExpenseId;
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn set_id(&mut self, id: ExpenseId) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            "Cine",
            "Entradas",
            12.5,
            "2024-05-01",
            CategoryId::new(1),
            PaymentMethodId::new(2),
            "pagado",
        )
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["cantidad"], 12.5);
        assert_eq!(json["fecha"], "2024-05-01");
        assert_eq!(json["categoriaId"], 1);
        assert_eq!(json["metodoPagoId"], 2);
        assert_eq!(json["estado"], "pagado");
    }

    #[test]
    fn test_parsed_date() {
        let mut expense = sample();
        assert_eq!(
            expense.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );

        expense.date = "2024-13-45".into();
        assert!(expense.parsed_date().is_none());
    }

    #[test]
    fn test_known_status() {
        let mut expense = sample();
        assert_eq!(expense.known_status(), Some(ExpenseStatus::Paid));

        expense.status = "reembolsado".into();
        assert_eq!(expense.known_status(), None);
    }
}
