//! Core data models for gastos
//!
//! Categories and payment methods are reference entities identified by their
//! `nombre`; expenses are transactional records that point at one of each.
//! Field names on the wire keep the Spanish spelling used by exported
//! bundles.

pub mod category;
pub mod expense;
pub mod ids;
pub mod payment_method;

pub use category::Category;
pub use expense::{Expense, ExpenseStatus};
pub use ids::{CategoryId, ExpenseId, PaymentMethodId};
pub use payment_method::PaymentMethod;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A row that lives in a store table with an autoincrement identity
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Typed identity of this record kind
    type Id: Copy + Ord + fmt::Debug + fmt::Display + From<u64> + Into<u64>;

    /// Entity name used in errors and audit entries
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    fn set_id(&mut self, id: Self::Id);

    /// The `nombre` attribute, used for equality lookups
    fn name(&self) -> &str;
}
