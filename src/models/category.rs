//! Category model
//!
//! A category groups expenses for reporting. Its natural key is `nombre`:
//! two categories with the same name are the same category as far as
//! imports are concerned.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::Record;

/// An expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identity
    pub id: CategoryId,

    /// Category name (natural key, case-sensitive)
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Color token used by the UI (e.g. "red")
    #[serde(default)]
    pub color: String,

    /// Short icon string, usually a single emoji
    #[serde(rename = "icono", default)]
    pub icon: String,
}

impl Category {
    /// Create a new, not yet persisted category
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(0),
            name: name.into(),
            description: description.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name cannot be empty".into());
        }
        Ok(())
    }
}

impl Record for Category {
    type Id = CategoryId;
    const ENTITY: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn set_id(&mut self, id: CategoryId) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.icon.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.icon, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let category = Category::new("Ocio", "Tiempo libre", "red", "🎮");
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["nombre"], "Ocio");
        assert_eq!(json["descripcion"], "Tiempo libre");
        assert_eq!(json["icono"], "🎮");
        assert_eq!(json["id"], 0);
    }

    #[test]
    fn test_validate() {
        assert!(Category::new("Ocio", "", "", "").validate().is_ok());
        assert!(Category::new("  ", "", "", "").validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::new("Ocio", "", "", "🎮").to_string(), "🎮 Ocio");
        assert_eq!(Category::new("Ocio", "", "", "").to_string(), "Ocio");
    }
}
