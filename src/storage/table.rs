//! Generic JSON-backed table with autoincrement identities
//!
//! Each collection (categories, payment methods, expenses) is one `Table`
//! persisted as `{ "next_id": n, "records": [...] }`. Identities start at 1
//! and are never handed out twice, even after the table is cleared.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::{GastosError, GastosResult};
use crate::models::Record;

use super::file_io::{read_json, write_json_atomic};

/// Store contract consumed by the import engine
///
/// Every insert commits on its own; there is no batch or transactional
/// variant.
pub trait Collection<T: Record> {
    /// First row (lowest id) whose `nombre` equals `name` exactly
    fn find_by_name(&self, name: &str) -> GastosResult<Option<T>>;

    /// Insert a row, ignoring its id field; returns the assigned identity
    fn insert(&self, record: T) -> GastosResult<T::Id>;

    fn get(&self, id: T::Id) -> GastosResult<Option<T>>;
}

/// On-disk layout of a table file
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "T: Record")]
struct TableData<T> {
    next_id: u64,
    records: Vec<T>,
}

impl<T> Default for TableData<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

struct TableState<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

/// Repository for one collection of records
pub struct Table<T: Record> {
    path: PathBuf,
    state: RwLock<TableState<T>>,
}

impl<T: Record> Table<T> {
    /// Create an empty table backed by `path` (nothing is read until `load`)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(TableState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn read_state(&self) -> GastosResult<RwLockReadGuard<'_, TableState<T>>> {
        self.state
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_state(&self) -> GastosResult<RwLockWriteGuard<'_, TableState<T>>> {
        self.state
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load rows from disk, replacing whatever is in memory
    pub fn load(&self) -> GastosResult<()> {
        let file_data: TableData<T> = read_json(&self.path)?;
        let mut state = self.write_state()?;

        state.rows.clear();
        for record in file_data.records {
            state.rows.insert(record.id().into(), record);
        }

        let after_max = state.rows.keys().next_back().map_or(1, |max| max + 1);
        state.next_id = file_data.next_id.max(after_max);

        Ok(())
    }

    /// Save rows to disk
    pub fn save(&self) -> GastosResult<()> {
        let state = self.read_state()?;
        let file_data = TableData {
            next_id: state.next_id,
            records: state.rows.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// All rows in id order
    pub fn get_all(&self) -> GastosResult<Vec<T>> {
        Ok(self.read_state()?.rows.values().cloned().collect())
    }

    pub fn count(&self) -> GastosResult<usize> {
        Ok(self.read_state()?.rows.len())
    }

    /// Remove every row; returns how many were removed
    pub fn clear(&self) -> GastosResult<usize> {
        let mut state = self.write_state()?;
        let removed = state.rows.len();
        state.rows.clear();
        Ok(removed)
    }
}

impl<T: Record> Collection<T> for Table<T> {
    fn find_by_name(&self, name: &str) -> GastosResult<Option<T>> {
        let state = self.read_state()?;
        Ok(state.rows.values().find(|r| r.name() == name).cloned())
    }

    fn insert(&self, mut record: T) -> GastosResult<T::Id> {
        let mut state = self.write_state()?;

        let id = T::Id::from(state.next_id);
        state.next_id += 1;

        record.set_id(id);
        state.rows.insert(id.into(), record);
        Ok(id)
    }

    fn get(&self, id: T::Id) -> GastosResult<Option<T>> {
        let key: u64 = id.into();
        let state = self.read_state()?;
        Ok(state.rows.get(&key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId};
    use tempfile::TempDir;

    fn create_test_table() -> (TempDir, Table<Category>) {
        let temp_dir = TempDir::new().unwrap();
        let table = Table::new(temp_dir.path().join("categorias.json"));
        table.load().unwrap();
        (temp_dir, table)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, table) = create_test_table();
        assert_eq!(table.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let (_temp_dir, table) = create_test_table();

        let mut ocio = Category::new("Ocio", "", "red", "🎮");
        ocio.id = CategoryId::new(99);
        let first = table.insert(ocio).unwrap();
        let second = table.insert(Category::new("Hogar", "", "green", "🏠")).unwrap();

        assert_eq!(first, CategoryId::new(1));
        assert_eq!(second, CategoryId::new(2));
        assert_eq!(table.get(first).unwrap().unwrap().id, first);
        assert!(table.get(CategoryId::new(99)).unwrap().is_none());
    }

    #[test]
    fn test_find_by_name_is_exact_and_first_wins() {
        let (_temp_dir, table) = create_test_table();
        let first = table.insert(Category::new("Ocio", "a", "", "")).unwrap();
        table.insert(Category::new("Ocio", "b", "", "")).unwrap();

        let found = table.find_by_name("Ocio").unwrap().unwrap();
        assert_eq!(found.id, first);
        assert!(table.find_by_name("ocio").unwrap().is_none());
        assert!(table.find_by_name("Ocio ").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_keeps_counter() {
        let (temp_dir, table) = create_test_table();
        table.insert(Category::new("Ocio", "", "", "")).unwrap();
        table.insert(Category::new("Hogar", "", "", "")).unwrap();
        table.save().unwrap();

        let reloaded: Table<Category> = Table::new(temp_dir.path().join("categorias.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);

        let next = reloaded.insert(Category::new("Salud", "", "", "")).unwrap();
        assert_eq!(next, CategoryId::new(3));
    }

    #[test]
    fn test_clear_does_not_reuse_ids() {
        let (_temp_dir, table) = create_test_table();
        table.insert(Category::new("Ocio", "", "", "")).unwrap();
        table.insert(Category::new("Hogar", "", "", "")).unwrap();

        assert_eq!(table.clear().unwrap(), 2);
        assert_eq!(table.count().unwrap(), 0);

        let id = table.insert(Category::new("Salud", "", "", "")).unwrap();
        assert_eq!(id, CategoryId::new(3));
    }

    #[test]
    fn test_load_repairs_stale_counter() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categorias.json");
        std::fs::write(
            &path,
            r#"{"next_id": 1, "records": [{"id": 5, "nombre": "Ocio"}]}"#,
        )
        .unwrap();

        let table: Table<Category> = Table::new(path);
        table.load().unwrap();
        let id = table.insert(Category::new("Hogar", "", "", "")).unwrap();
        assert_eq!(id, CategoryId::new(6));
    }
}
