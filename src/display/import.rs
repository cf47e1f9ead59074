//! Import summary formatting

use crate::import::ImportReport;

/// Text summary of an import run, followed by every error detail
pub fn format_import_summary(report: &ImportReport) -> String {
    let mut output = String::new();

    output.push_str("Resultado de la importación\n");
    output.push_str(&format!("  Total de gastos:      {}\n", report.total));
    output.push_str(&format!("  Gastos importados:    {}\n", report.success));
    output.push_str(&format!("  Categorías nuevas:    {}\n", report.categories_imported));
    output.push_str(&format!("  Métodos nuevos:       {}\n", report.payment_methods_imported));
    output.push_str(&format!("  Errores:              {}\n", report.errors));

    let messages = report.success_messages();
    if !messages.is_empty() {
        output.push('\n');
        output.push_str(&messages.join(", "));
        output.push('\n');
    }

    if let Some(failure) = report.failure_message() {
        output.push_str(&failure);
        output.push('\n');
    }

    let details = report.error_details();
    if !details.is_empty() {
        output.push_str("\nDetalles:\n");
        for detail in details {
            output.push_str(&format!("  - {}\n", detail));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{EntityKind, ImportIssue, IssueReason};

    #[test]
    fn test_summary_lists_details() {
        let mut report = ImportReport::new(2);
        report.success = 1;
        report.errors = 1;
        report.categories_imported = 1;
        report.issues.push(ImportIssue {
            kind: EntityKind::Expense,
            index: 1,
            name: None,
            reasons: vec![IssueReason::MissingPaymentMethod("99".into())],
        });

        let output = format_import_summary(&report);
        assert!(output.contains("Gastos importados:    1"));
        assert!(output.contains("1 categorías importadas, 1 gastos importados"));
        assert!(output.contains("1 gastos no pudieron ser importados"));
        assert!(output.contains("  - Gasto 2: Método de pago con ID 99 no existe"));
    }

    #[test]
    fn test_clean_run_has_no_details() {
        let report = ImportReport::new(0);
        assert!(!format_import_summary(&report).contains("Detalles"));
    }
}
