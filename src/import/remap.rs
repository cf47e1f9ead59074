//! Import-time id translation tables
//!
//! Exported bundles reference categories and payment methods by the
//! exporter's own ids. While the reference stage runs it records, for every
//! candidate that carried an id, which local row that id now means. The
//! expense stage then resolves references through these tables. A table
//! lives for one run only.

use std::collections::HashMap;

use crate::models::{CategoryId, PaymentMethodId};

/// Source id → persisted id for one reference kind
#[derive(Debug, Clone)]
pub struct IdRemap<I> {
    entries: HashMap<u64, I>,
}

pub type CategoryRemap = IdRemap<CategoryId>;
pub type PaymentMethodRemap = IdRemap<PaymentMethodId>;

impl<I> Default for IdRemap<I> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<I: Copy + From<u64>> IdRemap<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `source` in the bundle means `target` locally
    pub fn record(&mut self, source: u64, target: I) {
        self.entries.insert(source, target);
    }

    pub fn get(&self, source: u64) -> Option<I> {
        self.entries.get(&source).copied()
    }

    /// Mapped id if there is one, otherwise the literal reference
    pub fn resolve(&self, source: u64) -> I {
        self.get(source).unwrap_or_else(|| I::from(source))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
