//! Progress reporting for an import run
//!
//! The plan is computed from the whole bundle before the first stage runs,
//! so the denominator is fixed and the reported percentage only ever grows.

use super::format::ImportBundle;

/// Stage an import step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    Categories,
    PaymentMethods,
    Expenses,
}

impl ImportStage {
    pub fn label(&self) -> &'static str {
        match self {
            ImportStage::Categories => "Categorías",
            ImportStage::PaymentMethods => "Métodos de pago",
            ImportStage::Expenses => "Gastos",
        }
    }
}

/// Number of steps each stage will take
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportPlan {
    pub categories: usize,
    pub payment_methods: usize,
    pub expenses: usize,
}

impl ImportPlan {
    pub fn for_bundle(bundle: &ImportBundle) -> Self {
        Self {
            categories: bundle.categories.len(),
            payment_methods: bundle.payment_methods.len(),
            expenses: bundle.expenses.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.categories + self.payment_methods + self.expenses
    }
}

/// Snapshot sent to observers after every processed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub stage: ImportStage,
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion rounded to a whole percentage
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Receives progress snapshots during a run
pub trait ProgressObserver {
    fn on_progress(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> ProgressObserver for F {
    fn on_progress(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Observer that ignores everything
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _progress: Progress) {}
}

/// Counts completed steps against a fixed plan
pub(crate) struct ProgressTracker<'a> {
    total: usize,
    completed: usize,
    observer: &'a mut dyn ProgressObserver,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(plan: ImportPlan, observer: &'a mut dyn ProgressObserver) -> Self {
        Self {
            total: plan.total(),
            completed: 0,
            observer,
        }
    }

    pub(crate) fn advance(&mut self, stage: ImportStage) {
        self.completed = (self.completed + 1).min(self.total);
        self.observer.on_progress(Progress {
            stage,
            completed: self.completed,
            total: self.total,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounding() {
        let progress = |completed| Progress {
            stage: ImportStage::Expenses,
            completed,
            total: 3,
        };
        assert_eq!(progress(0).percent(), 0);
        assert_eq!(progress(1).percent(), 33);
        assert_eq!(progress(2).percent(), 67);
        assert_eq!(progress(3).percent(), 100);
    }

    #[test]
    fn test_empty_plan_is_complete() {
        let progress = Progress {
            stage: ImportStage::Expenses,
            completed: 0,
            total: 0,
        };
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_tracker_reports_against_fixed_total() {
        let plan = ImportPlan {
            categories: 1,
            payment_methods: 1,
            expenses: 2,
        };
        let mut seen = Vec::new();
        let mut observer = |p: Progress| seen.push(p.percent());
        {
            let mut tracker = ProgressTracker::new(plan, &mut observer);
            tracker.advance(ImportStage::Categories);
            tracker.advance(ImportStage::PaymentMethods);
            tracker.advance(ImportStage::Expenses);
            tracker.advance(ImportStage::Expenses);
        }
        assert_eq!(seen, vec![25, 50, 75, 100]);
    }
}
