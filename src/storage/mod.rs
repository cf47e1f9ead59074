//! Storage layer for gastos
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each collection lives in its own file under `data/`.

pub mod file_io;
pub mod table;

pub use file_io::{read_json, write_json_atomic};
pub use table::{Collection, Table};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::GastosPaths;
use crate::error::GastosError;
use crate::models::{Category, Expense, PaymentMethod, Record};

/// Main storage coordinator that provides access to all tables
pub struct Storage {
    audit: AuditLogger,
    audit_enabled: bool,
    pub categories: Table<Category>,
    pub payment_methods: Table<PaymentMethod>,
    pub expenses: Table<Expense>,
}

/// Row counts removed by [`Storage::clear_all`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearedCounts {
    pub categories: usize,
    pub payment_methods: usize,
    pub expenses: usize,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: GastosPaths) -> Result<Self, GastosError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: Table::new(paths.categories_file()),
            payment_methods: Table::new(paths.payment_methods_file()),
            expenses: Table::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
        })
    }

    /// Turn audit logging on or off for this session
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record that `record` was created
    pub fn log_create<T: Record>(
        &self,
        entity_type: EntityType,
        record: &T,
    ) -> Result<(), GastosError> {
        self.log_batch(&[AuditEntry::create(entity_type, record)])
    }

    /// Append entries to the audit log unless auditing is off
    pub fn log_batch(&self, entries: &[AuditEntry]) -> Result<(), GastosError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log_batch(entries)
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), GastosError> {
        self.categories.load()?;
        self.payment_methods.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), GastosError> {
        self.categories.save()?;
        self.payment_methods.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Empty every collection and persist the result
    pub fn clear_all(&self) -> Result<ClearedCounts, GastosError> {
        let counts = ClearedCounts {
            expenses: self.expenses.clear()?,
            categories: self.categories.clear()?,
            payment_methods: self.payment_methods.clear()?,
        };
        self.save_all()?;

        self.log_batch(&[
            AuditEntry::clear(EntityType::Expense, counts.expenses),
            AuditEntry::clear(EntityType::Category, counts.categories),
            AuditEntry::clear(EntityType::PaymentMethod, counts.payment_methods),
        ])?;

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, _storage) = create_test_storage();
        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_save_and_reload_all() {
        let (temp_dir, storage) = create_test_storage();
        storage
            .categories
            .insert(Category::new("Ocio", "", "red", "🎮"))
            .unwrap();
        storage
            .payment_methods
            .insert(PaymentMethod::new("Efectivo", "", "💰"))
            .unwrap();
        storage.save_all().unwrap();

        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();

        assert_eq!(reloaded.categories.count().unwrap(), 1);
        assert_eq!(reloaded.payment_methods.count().unwrap(), 1);
        assert_eq!(reloaded.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_clear_all() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .categories
            .insert(Category::new("Ocio", "", "", ""))
            .unwrap();
        storage
            .categories
            .insert(Category::new("Hogar", "", "", ""))
            .unwrap();

        let cleared = storage.clear_all().unwrap();
        assert_eq!(cleared.categories, 2);
        assert_eq!(cleared.payment_methods, 0);
        assert_eq!(storage.categories.count().unwrap(), 0);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].detail.as_deref(), Some("2 rows removed"));
    }

    #[test]
    fn test_disabled_audit_writes_nothing() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.set_audit_enabled(false);

        let mut category = Category::new("Ocio", "", "", "");
        category.id = storage.categories.insert(category.clone()).unwrap();
        storage.log_create(EntityType::Category, &category).unwrap();
        storage.clear_all().unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 0);
    }
}
