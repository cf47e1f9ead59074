//! Expense display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::services::ExpenseDetail;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Fecha")]
    date: String,
    #[tabled(rename = "Nombre")]
    name: String,
    #[tabled(rename = "Cantidad")]
    amount: String,
    #[tabled(rename = "Categoría")]
    category: String,
    #[tabled(rename = "Método")]
    method: String,
    #[tabled(rename = "Estado")]
    status: String,
}

/// Format expenses as a table, amounts in the configured currency
pub fn format_expense_list(expenses: &[ExpenseDetail], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|d| ExpenseRow {
        id: d.expense.id.value(),
        date: d.expense.date.clone(),
        name: d.expense.name.clone(),
        amount: settings.format_amount(d.expense.amount),
        category: d
            .category_name
            .clone()
            .unwrap_or_else(|| format!("#{}", d.expense.category_id)),
        method: d
            .payment_method_name
            .clone()
            .unwrap_or_else(|| format!("#{}", d.expense.payment_method_id)),
        status: d.expense.status.clone(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));
    table.to_string()
}

/// Format one expense with its resolved references
pub fn format_expense_details(detail: &ExpenseDetail, settings: &Settings) -> String {
    let expense = &detail.expense;
    let category = detail
        .category_name
        .clone()
        .unwrap_or_else(|| format!("#{} (missing)", expense.category_id));
    let method = detail
        .payment_method_name
        .clone()
        .unwrap_or_else(|| format!("#{} (missing)", expense.payment_method_id));

    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  ID:          {}\n", expense.id));
    output.push_str(&format!("  Fecha:       {}\n", expense.date));
    output.push_str(&format!("  Cantidad:    {}\n", settings.format_amount(expense.amount)));
    output.push_str(&format!("  Descripción: {}\n", expense.description));
    output.push_str(&format!("  Categoría:   {}\n", category));
    output.push_str(&format!("  Método:      {}\n", method));
    output.push_str(&format!("  Estado:      {}\n", expense.status));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Expense, PaymentMethodId};

    #[test]
    fn test_expense_table() {
        let detail = ExpenseDetail {
            expense: Expense::new(
                "Cine",
                "Entradas",
                12.5,
                "2024-05-01",
                CategoryId::new(3),
                PaymentMethodId::new(1),
                "pagado",
            ),
            category_name: None,
            payment_method_name: Some("Efectivo".into()),
        };

        let output = format_expense_list(&[detail], &Settings::default());
        assert!(output.contains("$12.50"));
        assert!(output.contains("#3"));
        assert!(output.contains("Efectivo"));
    }

    #[test]
    fn test_expense_details_marks_missing_references() {
        let detail = ExpenseDetail {
            expense: Expense::new(
                "Luz",
                "Factura",
                40.0,
                "2024-02-01",
                CategoryId::new(2),
                PaymentMethodId::new(5),
                "pendiente",
            ),
            category_name: Some("Hogar".into()),
            payment_method_name: None,
        };

        let output = format_expense_details(&detail, &Settings::default());
        assert!(output.contains("Categoría:   Hogar"));
        assert!(output.contains("Método:      #5 (missing)"));
        assert!(output.contains("Estado:      pendiente"));
    }
}
