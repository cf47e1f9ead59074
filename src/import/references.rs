//! Reference entity merge (categories and payment methods)
//!
//! A candidate whose `nombre` already exists is matched to the existing row
//! and nothing is written. Otherwise it is inserted. Either way, when the
//! candidate carried an id, the remap learns what that id means locally.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{Category, PaymentMethod, Record};
use crate::storage::Collection;

use super::progress::{ImportStage, ProgressTracker};
use super::remap::IdRemap;
use super::report::{EntityKind, ImportIssue, IssueReason};

/// A record kind that can be merged by `nombre`
pub trait ReferenceRecord: Record {
    const KIND: EntityKind;
    const STAGE: ImportStage;

    /// Build an unsaved record from a bundle entry
    fn from_candidate(raw: &Value) -> Result<Self, String>;
}

#[derive(Deserialize)]
struct CategoryCandidate {
    nombre: String,
    #[serde(default)]
    descripcion: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    icono: String,
}

#[derive(Deserialize)]
struct PaymentMethodCandidate {
    nombre: String,
    #[serde(default)]
    descripcion: String,
    #[serde(default)]
    icono: String,
}

impl ReferenceRecord for Category {
    const KIND: EntityKind = EntityKind::Category;
    const STAGE: ImportStage = ImportStage::Categories;

    fn from_candidate(raw: &Value) -> Result<Self, String> {
        let c = CategoryCandidate::deserialize(raw).map_err(|e| e.to_string())?;
        let category = Category::new(c.nombre, c.descripcion, c.color, c.icono);
        category.validate()?;
        Ok(category)
    }
}

impl ReferenceRecord for PaymentMethod {
    const KIND: EntityKind = EntityKind::PaymentMethod;
    const STAGE: ImportStage = ImportStage::PaymentMethods;

    fn from_candidate(raw: &Value) -> Result<Self, String> {
        let c = PaymentMethodCandidate::deserialize(raw).map_err(|e| e.to_string())?;
        let method = PaymentMethod::new(c.nombre, c.descripcion, c.icono);
        method.validate()?;
        Ok(method)
    }
}

/// What one reference stage did
#[derive(Debug)]
pub struct ReferenceOutcome<T: Record> {
    pub remap: IdRemap<T::Id>,
    /// Ids of rows this stage inserted, in input order
    pub created: Vec<T::Id>,
    pub issues: Vec<ImportIssue>,
}

/// The exporter's id for a candidate, if it has a usable one
///
/// Only positive integers can be referenced by expenses, so anything else
/// is treated as absent.
pub fn source_id(raw: &Value) -> Option<u64> {
    raw.get("id").and_then(Value::as_u64).filter(|id| *id > 0)
}

fn candidate_name(raw: &Value) -> Option<String> {
    raw.get("nombre").and_then(Value::as_str).map(str::to_string)
}

/// Merge `candidates` into `collection` in input order
pub fn import_references<T: ReferenceRecord>(
    collection: &dyn Collection<T>,
    candidates: &[Value],
) -> ReferenceOutcome<T> {
    import_references_tracked(collection, candidates, None)
}

pub(crate) fn import_references_tracked<T: ReferenceRecord>(
    collection: &dyn Collection<T>,
    candidates: &[Value],
    mut tracker: Option<&mut ProgressTracker<'_>>,
) -> ReferenceOutcome<T> {
    let mut outcome = ReferenceOutcome {
        remap: IdRemap::new(),
        created: Vec::new(),
        issues: Vec::new(),
    };

    for (index, raw) in candidates.iter().enumerate() {
        if let Err(cause) = merge_candidate(collection, raw, &mut outcome) {
            outcome.issues.push(ImportIssue {
                kind: T::KIND,
                index,
                name: candidate_name(raw),
                reasons: vec![IssueReason::Rejected(cause)],
            });
        }

        if let Some(tracker) = tracker.as_deref_mut() {
            tracker.advance(T::STAGE);
        }
    }

    outcome
}

fn merge_candidate<T: ReferenceRecord>(
    collection: &dyn Collection<T>,
    raw: &Value,
    outcome: &mut ReferenceOutcome<T>,
) -> Result<(), String> {
    // Only the name decides a match; the rest is read when inserting
    let existing = match candidate_name(raw).filter(|name| !name.trim().is_empty()) {
        Some(name) => collection.find_by_name(&name).map_err(|e| e.to_string())?,
        None => None,
    };

    let local_id = match existing {
        Some(existing) => existing.id(),
        None => {
            let record = T::from_candidate(raw)?;
            let id = collection.insert(record).map_err(|e| e.to_string())?;
            outcome.created.push(id);
            id
        }
    };

    if let Some(source) = source_id(raw) {
        outcome.remap.record(source, local_id);
    }

    Ok(())
}
