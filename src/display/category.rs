//! Category and payment method display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, PaymentMethod};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Nombre")]
    name: String,
    #[tabled(rename = "Descripción")]
    description: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Icono")]
    icon: String,
}

#[derive(Tabled)]
struct PaymentMethodRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Nombre")]
    name: String,
    #[tabled(rename = "Descripción")]
    description: String,
    #[tabled(rename = "Icono")]
    icon: String,
}

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'gastos import <file>' or 'gastos category add'."
            .to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        id: c.id.value(),
        name: c.name.clone(),
        description: c.description.clone(),
        color: c.color.clone(),
        icon: c.icon.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format payment methods as a table
pub fn format_payment_method_list(methods: &[PaymentMethod]) -> String {
    if methods.is_empty() {
        return "No payment methods found.".to_string();
    }

    let rows = methods.iter().map(|m| PaymentMethodRow {
        id: m.id.value(),
        name: m.name.clone(),
        description: m.description.clone(),
        icon: m.icon.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format one category's fields
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:          {}\n", category.id));
    if !category.description.is_empty() {
        output.push_str(&format!("  Descripción: {}\n", category.description));
    }
    if !category.color.is_empty() {
        output.push_str(&format!("  Color:       {}\n", category.color));
    }
    if !category.icon.is_empty() {
        output.push_str(&format!("  Icono:       {}\n", category.icon));
    }

    output
}

pub fn format_payment_method_details(method: &PaymentMethod) -> String {
    let mut output = String::new();

    output.push_str(&format!("Payment method: {}\n", method.name));
    output.push_str(&format!("  ID:          {}\n", method.id));
    if !method.description.is_empty() {
        output.push_str(&format!("  Descripción: {}\n", method.description));
    }
    if !method.icon.is_empty() {
        output.push_str(&format!("  Icono:       {}\n", method.icon));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists() {
        assert!(format_category_list(&[]).starts_with("No categories found."));
        assert_eq!(format_payment_method_list(&[]), "No payment methods found.");
    }

    #[test]
    fn test_category_table() {
        let output = format_category_list(&[Category::new("Ocio", "Salidas", "red", "🎮")]);
        assert!(output.contains("Nombre"));
        assert!(output.contains("Ocio"));
        assert!(output.contains("red"));
    }

    #[test]
    fn test_payment_method_table() {
        let output = format_payment_method_list(&[PaymentMethod::new("Efectivo", "", "💰")]);
        assert!(output.contains("Efectivo"));
        assert!(!output.contains("Color"));
    }

    #[test]
    fn test_details_skip_empty_fields() {
        let output = format_category_details(&Category::new("Ocio", "", "red", ""));
        assert!(output.starts_with("Category: Ocio\n"));
        assert!(output.contains("Color:       red"));
        assert!(!output.contains("Descripción"));

        let output = format_payment_method_details(&PaymentMethod::new("Cheque", "Pagos", ""));
        assert!(output.contains("Descripción: Pagos"));
        assert!(!output.contains("Icono"));
    }
}
