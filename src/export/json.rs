//! JSON export
//!
//! Writes the store as a `{ categorias, metodosPago, gastos }` bundle with
//! the store's own ids, which the importer accepts as-is.

use std::collections::HashSet;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{GastosError, GastosResult};
use crate::models::{Category, Expense, PaymentMethod};
use crate::storage::Storage;

/// The bundle shape shared by exports and the example generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportBundle {
    #[serde(rename = "categorias")]
    pub categories: Vec<Category>,

    #[serde(rename = "metodosPago")]
    pub payment_methods: Vec<PaymentMethod>,

    #[serde(rename = "gastos")]
    pub expenses: Vec<Expense>,
}

impl ExportBundle {
    /// Snapshot every collection in the store
    pub fn from_storage(storage: &Storage) -> GastosResult<Self> {
        Ok(Self {
            categories: storage.categories.get_all()?,
            payment_methods: storage.payment_methods.get_all()?,
            expenses: storage.expenses.get_all()?,
        })
    }

    /// Check that every expense points at a category and method in the bundle
    pub fn validate(&self) -> Result<(), String> {
        let category_ids: HashSet<_> = self.categories.iter().map(|c| c.id).collect();
        let method_ids: HashSet<_> = self.payment_methods.iter().map(|m| m.id).collect();

        for expense in &self.expenses {
            if !category_ids.contains(&expense.category_id) {
                return Err(format!(
                    "Expense {} references unknown category {}",
                    expense.id, expense.category_id
                ));
            }
            if !method_ids.contains(&expense.payment_method_id) {
                return Err(format!(
                    "Expense {} references unknown payment method {}",
                    expense.id, expense.payment_method_id
                ));
            }
        }

        Ok(())
    }
}

/// Serialize a bundle as JSON
pub fn write_bundle_json<W: Write>(
    bundle: &ExportBundle,
    writer: &mut W,
    pretty: bool,
) -> GastosResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, bundle)
    } else {
        serde_json::to_writer(writer, bundle)
    }
    .map_err(|e| GastosError::Export(e.to_string()))
}

/// Export the whole store as a JSON bundle
pub fn export_bundle_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> GastosResult<()> {
    let bundle = ExportBundle::from_storage(storage)?;
    write_bundle_json(&bundle, writer, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GastosPaths;
    use crate::import::NoProgress;
    use crate::models::CategoryId;
    use crate::services::ImportService;
    use crate::storage::Collection;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage) {
        let category = storage
            .categories
            .insert(Category::new("Ocio", "Salidas", "red", "🎮"))
            .unwrap();
        let method = storage
            .payment_methods
            .insert(PaymentMethod::new("Efectivo", "", "💰"))
            .unwrap();
        storage
            .expenses
            .insert(Expense::new("Cine", "Entradas", 12.5, "2024-05-01", category, method, "pagado"))
            .unwrap();
    }

    #[test]
    fn test_bundle_uses_import_field_names() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let mut output = Vec::new();
        export_bundle_json(&storage, &mut output, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["categorias"][0]["nombre"], "Ocio");
        assert_eq!(value["categorias"][0]["id"], 1);
        assert_eq!(value["metodosPago"][0]["icono"], "💰");
        assert_eq!(value["gastos"][0]["categoriaId"], 1);
        assert_eq!(value["gastos"][0]["estado"], "pagado");
    }

    #[test]
    fn test_export_reimports_into_another_store() {
        let (_source_dir, source) = create_test_storage();
        source
            .categories
            .insert(Category::new("Relleno", "", "", ""))
            .unwrap();
        seed(&source);

        let mut output = Vec::new();
        export_bundle_json(&source, &mut output, true).unwrap();
        let text = String::from_utf8(output).unwrap();

        let (_target_dir, target) = create_test_storage();
        let report = ImportService::new(&target)
            .import_str(&text, &mut NoProgress)
            .unwrap();

        assert_eq!(report.success, 1);
        assert_eq!(report.categories_imported, 2);
        let cine = target.expenses.find_by_name("Cine").unwrap().unwrap();
        let category = target.categories.get(cine.category_id).unwrap().unwrap();
        assert_eq!(category.name, "Ocio");
        assert_eq!(cine.category_id, CategoryId::new(2));
    }

    #[test]
    fn test_validate_catches_dangling_reference() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let mut bundle = ExportBundle::from_storage(&storage).unwrap();
        assert!(bundle.validate().is_ok());

        bundle.categories.clear();
        assert!(bundle.validate().unwrap_err().contains("unknown category"));
    }
}
