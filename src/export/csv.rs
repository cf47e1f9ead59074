//! CSV export of expenses
//!
//! One row per expense with category and payment method names resolved.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{GastosError, GastosResult};
use crate::services::{CategoryService, PaymentMethodService};
use crate::storage::Storage;

const HEADER: [&str; 8] = [
    "id",
    "fecha",
    "nombre",
    "descripcion",
    "cantidad",
    "categoria",
    "metodoPago",
    "estado",
];

/// Export all expenses to CSV, in id order
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> GastosResult<()> {
    let category_names: HashMap<_, _> = CategoryService::new(storage)
        .list()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let method_names: HashMap<_, _> = PaymentMethodService::new(storage)
        .list()?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(HEADER)
        .map_err(|e| GastosError::Export(e.to_string()))?;

    for expense in storage.expenses.get_all()? {
        let category = category_names
            .get(&expense.category_id)
            .map(String::as_str)
            .unwrap_or("Unknown");
        let method = method_names
            .get(&expense.payment_method_id)
            .map(String::as_str)
            .unwrap_or("Unknown");

        csv_writer
            .write_record([
                expense.id.to_string().as_str(),
                expense.date.as_str(),
                expense.name.as_str(),
                expense.description.as_str(),
                format!("{:.2}", expense.amount).as_str(),
                category,
                method,
                expense.status.as_str(),
            ])
            .map_err(|e| GastosError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| GastosError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GastosPaths;
    use crate::models::{Category, CategoryId, Expense, PaymentMethod};
    use crate::storage::Collection;
    use tempfile::TempDir;

    #[test]
    fn test_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let category = storage
            .categories
            .insert(Category::new("Alimentación", "", "red", "🍔"))
            .unwrap();
        let method = storage
            .payment_methods
            .insert(PaymentMethod::new("Tarjeta de crédito", "", "💳"))
            .unwrap();
        storage
            .expenses
            .insert(Expense::new(
                "Cena, familiar",
                "Comida fuera de casa",
                42.0,
                "2024-02-14",
                category,
                method,
                "pagado",
            ))
            .unwrap();
        storage
            .expenses
            .insert(Expense::new("Libro", "d", 9.99, "2024-02-15", CategoryId::new(9), method, "pendiente"))
            .unwrap();

        let mut output = Vec::new();
        export_expenses_csv(&storage, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "id,fecha,nombre,descripcion,cantidad,categoria,metodoPago,estado"
        );
        assert_eq!(
            lines[1],
            "1,2024-02-14,\"Cena, familiar\",Comida fuera de casa,42.00,Alimentación,Tarjeta de crédito,pagado"
        );
        assert!(lines[2].contains(",Unknown,"));
    }
}
