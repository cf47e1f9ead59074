//! Bundle import service
//!
//! Runs the import stages in order against any [`ImportStore`] and assembles
//! the final [`ImportReport`]. Saving the store and writing the audit log are
//! left to the caller.

use serde_json::Value;

use crate::audit::{AuditEntry, EntityType};
use crate::error::GastosResult;
use crate::import::expenses::import_expenses_tracked;
use crate::import::progress::ProgressTracker;
use crate::import::references::import_references_tracked;
use crate::import::{
    detect_format, parse_bundle, ImportBundle, ImportPlan, ImportReport, ImportStore,
    ProgressObserver,
};
use crate::models::{Category, PaymentMethod};
use crate::storage::Collection;

/// Service for importing exported bundles
pub struct ImportService<'a> {
    store: &'a dyn ImportStore,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(store: &'a dyn ImportStore) -> Self {
        Self { store }
    }

    /// Parse and import the contents of a bundle file
    ///
    /// Fails without touching the store when the text is not JSON or has no
    /// expense array.
    pub fn import_str(
        &self,
        text: &str,
        observer: &mut dyn ProgressObserver,
    ) -> GastosResult<ImportReport> {
        let bundle = parse_bundle(text)?;
        Ok(self.import_bundle(&bundle, observer))
    }

    /// Import an already parsed JSON document
    pub fn import_value(
        &self,
        value: Value,
        observer: &mut dyn ProgressObserver,
    ) -> GastosResult<ImportReport> {
        let bundle = detect_format(value)?;
        Ok(self.import_bundle(&bundle, observer))
    }

    /// Run every stage over a detected bundle
    pub fn import_bundle(
        &self,
        bundle: &ImportBundle,
        observer: &mut dyn ProgressObserver,
    ) -> ImportReport {
        let mut tracker = ProgressTracker::new(ImportPlan::for_bundle(bundle), observer);

        let categories = import_references_tracked::<Category>(
            self.store.categories(),
            &bundle.categories,
            Some(&mut tracker),
        );
        let payment_methods = import_references_tracked::<PaymentMethod>(
            self.store.payment_methods(),
            &bundle.payment_methods,
            Some(&mut tracker),
        );
        let expenses = import_expenses_tracked(
            self.store,
            &bundle.expenses,
            &categories.remap,
            &payment_methods.remap,
            Some(&mut tracker),
        );

        let mut report = ImportReport::new(bundle.expenses.len());
        report.success = expenses.success;
        report.errors = expenses.errors;
        report.categories_imported = categories.created.len();
        report.payment_methods_imported = payment_methods.created.len();

        report.issues = categories.issues;
        report.issues.extend(payment_methods.issues);
        report.issues.extend(expenses.issues);

        report.created_category_ids = categories.created;
        report.created_payment_method_ids = payment_methods.created;
        report.created_expense_ids = expenses.created;

        report
    }

    /// Audit entries for every row the run created
    pub fn audit_entries(&self, report: &ImportReport) -> GastosResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();

        collect_created(
            self.store.categories(),
            &report.created_category_ids,
            EntityType::Category,
            &mut entries,
        )?;
        collect_created(
            self.store.payment_methods(),
            &report.created_payment_method_ids,
            EntityType::PaymentMethod,
            &mut entries,
        )?;
        collect_created(
            self.store.expenses(),
            &report.created_expense_ids,
            EntityType::Expense,
            &mut entries,
        )?;

        Ok(entries)
    }
}

fn collect_created<T: crate::models::Record>(
    collection: &dyn Collection<T>,
    ids: &[T::Id],
    entity_type: EntityType,
    entries: &mut Vec<AuditEntry>,
) -> GastosResult<()> {
    for id in ids {
        if let Some(record) = collection.get(*id)? {
            entries.push(AuditEntry::create(entity_type, &record));
        }
    }
    Ok(())
}
