//! CLI command handler for bundle import
//!
//! Reads an exported bundle, runs the importer with a progress bar, saves
//! the store and records every created row in the audit log.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::display::format_import_summary;
use crate::error::{GastosError, GastosResult};
use crate::import::{parse_bundle, ImportPlan, ImportReport, NoProgress, Progress};
use crate::services::ImportService;
use crate::storage::Storage;

/// Message for files that are not `.json`
pub const JSON_ONLY_MESSAGE: &str = "Solo se permiten archivos JSON";

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: &Path, json: bool) -> GastosResult<()> {
    if !has_json_extension(file) {
        return Err(GastosError::Import(JSON_ONLY_MESSAGE.into()));
    }

    let content = std::fs::read_to_string(file)
        .map_err(|e| GastosError::Import(format!("Failed to read file: {}", e)))?;
    let bundle = parse_bundle(&content)?;

    let service = ImportService::new(storage);
    let report = if json {
        service.import_bundle(&bundle, &mut NoProgress)
    } else {
        let bar = ProgressBar::new(ImportPlan::for_bundle(&bundle).total() as u64);
        let style = ProgressStyle::with_template("{prefix:>16} [{bar:30}] {pos}/{len} ({percent}%)")
            .map_err(|e| GastosError::Config(e.to_string()))?
            .progress_chars("=>-");
        bar.set_style(style);

        let mut observer = |progress: Progress| {
            bar.set_prefix(progress.stage.label());
            bar.set_position(progress.completed as u64);
        };
        let report = service.import_bundle(&bundle, &mut observer);
        bar.finish_and_clear();
        report
    };

    storage.save_all()?;
    storage.log_batch(&service.audit_entries(&report)?)?;

    print_report(&report, json)
}

fn print_report(report: &ImportReport, json: bool) -> GastosResult<()> {
    if json {
        let output = serde_json::to_string_pretty(&report.summary())
            .map_err(|e| GastosError::Json(e.to_string()))?;
        println!("{}", output);
    } else {
        print!("{}", format_import_summary(report));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GastosPaths;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_json_extension() {
        assert!(has_json_extension(Path::new("bundle.json")));
        assert!(has_json_extension(Path::new("BUNDLE.JSON")));
        assert!(!has_json_extension(Path::new("bundle.csv")));
        assert!(!has_json_extension(Path::new("bundle")));
    }

    #[test]
    fn test_rejects_non_json_file() {
        let (temp_dir, storage) = create_test_storage();
        let file = temp_dir.path().join("gastos.txt");
        std::fs::write(&file, "[]").unwrap();

        let err = handle_import_command(&storage, &file, true).unwrap_err();
        assert_eq!(err.to_string(), format!("Import error: {}", JSON_ONLY_MESSAGE));
    }

    #[test]
    fn test_import_persists_and_audits() {
        let (temp_dir, storage) = create_test_storage();
        let file = temp_dir.path().join("bundle.json");
        let bundle = json!({
            "categorias": [{"id": 1, "nombre": "Ocio"}],
            "metodosPago": [{"id": 1, "nombre": "Efectivo"}],
            "gastos": [{
                "nombre": "Cine",
                "descripcion": "Entradas",
                "cantidad": 9.5,
                "fecha": "2024-01-05",
                "categoriaId": 1,
                "metodoPagoId": 1,
                "estado": "pagado"
            }]
        });
        std::fs::write(&file, bundle.to_string()).unwrap();

        handle_import_command(&storage, &file, true).unwrap();

        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.expenses.count().unwrap(), 1);
        assert_eq!(storage.audit().entry_count().unwrap(), 3);
    }
}
