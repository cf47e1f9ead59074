//! Input shape detection
//!
//! Two shapes are accepted: a bundle object
//! `{ "categorias"?, "metodosPago"?, "gastos" }` and the legacy bare array
//! of expenses. Entries are kept as raw JSON; each stage reads them on its
//! own so one malformed entry only fails that entry.

use serde_json::Value;

use crate::error::{GastosError, GastosResult};

/// Fatal message when the expense list is missing or not an array
pub const INVALID_EXPENSES_MESSAGE: &str = "El archivo debe contener gastos válidos";

/// Fatal message when the file is not JSON at all
pub const INVALID_JSON_MESSAGE: &str =
    "Error al procesar el archivo. Verifica que sea un JSON válido.";

/// Which of the accepted shapes the input had
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleShape {
    /// Object with a `gastos` property
    Bundle,
    /// Anything else, treated as the expense list itself
    Legacy,
}

/// A detected import payload
#[derive(Debug, Clone)]
pub struct ImportBundle {
    pub shape: BundleShape,
    pub categories: Vec<Value>,
    pub payment_methods: Vec<Value>,
    pub expenses: Vec<Value>,
}

/// Parse file text and detect its shape
pub fn parse_bundle(text: &str) -> GastosResult<ImportBundle> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| GastosError::Import(format!("{} ({})", INVALID_JSON_MESSAGE, e)))?;
    detect_format(value)
}

/// Classify a parsed value as a bundle or a legacy expense array
pub fn detect_format(value: Value) -> GastosResult<ImportBundle> {
    match value {
        Value::Object(mut map) if map.contains_key("gastos") => {
            let expenses = match map.remove("gastos") {
                Some(Value::Array(items)) => items,
                _ => return Err(GastosError::Import(INVALID_EXPENSES_MESSAGE.into())),
            };
            let categories = optional_section(map.remove("categorias"), "categorías")?;
            let payment_methods = optional_section(map.remove("metodosPago"), "métodos de pago")?;

            Ok(ImportBundle {
                shape: BundleShape::Bundle,
                categories,
                payment_methods,
                expenses,
            })
        }
        Value::Array(items) => Ok(ImportBundle {
            shape: BundleShape::Legacy,
            categories: Vec::new(),
            payment_methods: Vec::new(),
            expenses: items,
        }),
        _ => Err(GastosError::Import(INVALID_EXPENSES_MESSAGE.into())),
    }
}

fn optional_section(value: Option<Value>, label: &str) -> GastosResult<Vec<Value>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(GastosError::Import(format!(
            "El archivo debe contener {} válidos",
            label
        ))),
    }
}
