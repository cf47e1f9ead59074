//! Category service
//!
//! Manual creation and lookup of categories. Names are unique, matching the
//! equality rule the importer merges on.

use crate::audit::EntityType;
use crate::error::{GastosError, GastosResult};
use crate::models::{Category, CategoryId};
use crate::storage::{Collection, Storage};

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(
        &self,
        name: &str,
        description: &str,
        color: &str,
        icon: &str,
    ) -> GastosResult<Category> {
        let mut category = Category::new(name.trim(), description.trim(), color.trim(), icon.trim());
        category.validate().map_err(GastosError::Validation)?;

        if self.storage.categories.find_by_name(&category.name)?.is_some() {
            return Err(GastosError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        category.id = self.storage.categories.insert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(EntityType::Category, &category)?;

        Ok(category)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> GastosResult<Option<Category>> {
        if let Some(category) = self.storage.categories.find_by_name(identifier)? {
            return Ok(Some(category));
        }

        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(None)
    }

    /// Like [`find`](Self::find), but a missing category is an error
    pub fn require(&self, identifier: &str) -> GastosResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| GastosError::category_not_found(identifier))
    }

    /// List all categories in id order
    pub fn list(&self) -> GastosResult<Vec<Category>> {
        self.storage.categories.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GastosPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let category = service.create("  Ocio ", "Salidas", "red", "🎮").unwrap();

        assert_eq!(category.id, CategoryId::new(1));
        assert_eq!(category.name, "Ocio");
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.create("Ocio", "", "", "").unwrap();
        let err = service.create("Ocio", "otra", "", "").unwrap_err();

        assert!(matches!(err, GastosError::Duplicate { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let err = service.create("   ", "", "", "").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let created = service.create("Hogar", "", "green", "🏠").unwrap();

        assert_eq!(service.find("Hogar").unwrap().unwrap().id, created.id);
        assert_eq!(service.find("1").unwrap().unwrap().name, "Hogar");
        assert!(service.find("Salud").unwrap().is_none());
    }

    #[test]
    fn test_require_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        service.create("Hogar", "", "", "").unwrap();

        assert_eq!(service.require("1").unwrap().name, "Hogar");
        let err = service.require("Salud").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Category not found: Salud");
    }
}
