//! Payment method service

use crate::audit::EntityType;
use crate::error::{GastosError, GastosResult};
use crate::models::{PaymentMethod, PaymentMethodId};
use crate::storage::{Collection, Storage};

/// Service for payment method management
pub struct PaymentMethodService<'a> {
    storage: &'a Storage,
}

impl<'a> PaymentMethodService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new payment method; names must be unique
    pub fn create(&self, name: &str, description: &str, icon: &str) -> GastosResult<PaymentMethod> {
        let mut method = PaymentMethod::new(name.trim(), description.trim(), icon.trim());
        method.validate().map_err(GastosError::Validation)?;

        if self
            .storage
            .payment_methods
            .find_by_name(&method.name)?
            .is_some()
        {
            return Err(GastosError::Duplicate {
                entity_type: "Payment method",
                identifier: method.name,
            });
        }

        method.id = self.storage.payment_methods.insert(method.clone())?;
        self.storage.payment_methods.save()?;

        self.storage.log_create(EntityType::PaymentMethod, &method)?;

        Ok(method)
    }

    /// Find a payment method by name or ID string
    pub fn find(&self, identifier: &str) -> GastosResult<Option<PaymentMethod>> {
        if let Some(method) = self.storage.payment_methods.find_by_name(identifier)? {
            return Ok(Some(method));
        }

        match identifier.parse::<PaymentMethodId>() {
            Ok(id) => self.storage.payment_methods.get(id),
            Err(_) => Ok(None),
        }
    }

    pub fn require(&self, identifier: &str) -> GastosResult<PaymentMethod> {
        self.find(identifier)?
            .ok_or_else(|| GastosError::payment_method_not_found(identifier))
    }

    pub fn list(&self) -> GastosResult<Vec<PaymentMethod>> {
        self.storage.payment_methods.get_all()
    }
}
