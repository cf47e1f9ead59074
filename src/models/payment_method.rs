//! Payment method model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PaymentMethodId;
use super::Record;

/// How an expense was paid (cash, card, transfer...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Store-assigned identity
    pub id: PaymentMethodId,

    /// Method name (natural key, case-sensitive)
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "icono", default)]
    pub icon: String,
}

impl PaymentMethod {
    /// Create a new, not yet persisted payment method
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: PaymentMethodId::new(0),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Payment method name cannot be empty".into());
        }
        Ok(())
    }
}

impl Record for PaymentMethod {
    type Id = PaymentMethodId;
    const ENTITY: &'static str = "Payment method";

    fn id(&self) -> PaymentMethodId {
        self.id
    }

    fn set_id(&mut self, id: PaymentMethodId) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PaymentMethod {
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
    fn test_deserialize_without_optional_fields() {
        let method: PaymentMethod =
            serde_json::from_str(r#"{"id": 3, "nombre": "Efectivo"}"#).unwrap();
        assert_eq!(method.id, PaymentMethodId::new(3));
        assert_eq!(method.name, "Efectivo");
        assert!(method.description.is_empty());
        assert!(method.icon.is_empty());
    }
}
