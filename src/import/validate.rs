//! Structural validation of raw expense entries
//!
//! Runs before any store access. Every rule is checked so a single entry
//! reports all of its problems at once.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Number, Value};

/// One broken rule in a raw expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    NotAnObject,
    MissingName,
    MissingDescription,
    NonPositiveAmount,
    MalformedDate,
    InvalidCategoryId,
    InvalidPaymentMethodId,
    MissingStatus,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Violation::NotAnObject => "gasto debe ser un objeto",
            Violation::MissingName => "nombre es requerido y debe ser string",
            Violation::MissingDescription => "descripcion es requerida y debe ser string",
            Violation::NonPositiveAmount => "cantidad debe ser un número positivo",
            Violation::MalformedDate => "fecha debe estar en formato YYYY-MM-DD",
            Violation::InvalidCategoryId => "categoriaId debe ser un número positivo",
            Violation::InvalidPaymentMethodId => "metodoPagoId debe ser un número positivo",
            Violation::MissingStatus => "estado es requerido y debe ser string",
        };
        f.write_str(msg)
    }
}

/// A raw expense that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub name: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
    /// Category reference in the exporter's numbering
    pub category_ref: Number,
    /// Payment method reference in the exporter's numbering
    pub payment_method_ref: Number,
    pub status: String,
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"))
}

fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn positive_number<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Number> {
    match obj.get(key) {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v > 0.0) => Some(n),
        _ => None,
    }
}

/// List every rule `raw` breaks; an empty list means it is valid
pub fn validate_expense(raw: &Value) -> Vec<Violation> {
    match parse_expense(raw) {
        Ok(_) => Vec::new(),
        Err(violations) => violations,
    }
}

/// Validate `raw` and, if it passes, extract its fields
pub fn parse_expense(raw: &Value) -> Result<ExpenseInput, Vec<Violation>> {
    let Some(obj) = raw.as_object() else {
        return Err(vec![Violation::NotAnObject]);
    };

    let mut violations = Vec::new();

    let name = non_empty_str(obj, "nombre");
    if name.is_none() {
        violations.push(Violation::MissingName);
    }

    let description = non_empty_str(obj, "descripcion");
    if description.is_none() {
        violations.push(Violation::MissingDescription);
    }

    let amount = positive_number(obj, "cantidad").and_then(Number::as_f64);
    if amount.is_none() {
        violations.push(Violation::NonPositiveAmount);
    }

    let date = obj
        .get("fecha")
        .and_then(Value::as_str)
        .filter(|s| date_pattern().is_match(s));
    if date.is_none() {
        violations.push(Violation::MalformedDate);
    }

    let category_ref = positive_number(obj, "categoriaId");
    if category_ref.is_none() {
        violations.push(Violation::InvalidCategoryId);
    }

    let payment_method_ref = positive_number(obj, "metodoPagoId");
    if payment_method_ref.is_none() {
        violations.push(Violation::InvalidPaymentMethodId);
    }

    let status = non_empty_str(obj, "estado");
    if status.is_none() {
        violations.push(Violation::MissingStatus);
    }

    match (
        name,
        description,
        amount,
        date,
        category_ref,
        payment_method_ref,
        status,
    ) {
        (Some(name), Some(description), Some(amount), Some(date), Some(cat), Some(method), Some(status))
            if violations.is_empty() =>
        {
            Ok(ExpenseInput {
                name: name.to_string(),
                description: description.to_string(),
                amount,
                date: date.to_string(),
                category_ref: cat.clone(),
                payment_method_ref: method.clone(),
                status: status.to_string(),
            })
        }
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "nombre": "Cine",
            "descripcion": "Entradas",
            "cantidad": 12.5,
            "fecha": "2024-05-01",
            "categoriaId": 1,
            "metodoPagoId": 2,
            "estado": "pagado"
        })
    }

    #[test]
    fn test_valid_expense() {
        assert!(validate_expense(&valid()).is_empty());

        let input = parse_expense(&valid()).unwrap();
        assert_eq!(input.name, "Cine");
        assert_eq!(input.amount, 12.5);
        assert_eq!(input.category_ref.as_u64(), Some(1));
        assert_eq!(input.payment_method_ref.as_u64(), Some(2));
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(validate_expense(&json!([1, 2])), vec![Violation::NotAnObject]);
        assert_eq!(validate_expense(&json!(null)), vec![Violation::NotAnObject]);
    }

    #[test]
    fn test_collects_every_violation() {
        let mut raw = valid();
        raw["cantidad"] = json!(-5);
        raw["fecha"] = json!("01/05/2024");

        assert_eq!(
            validate_expense(&raw),
            vec![Violation::NonPositiveAmount, Violation::MalformedDate]
        );
    }

    #[test]
    fn test_empty_object_breaks_every_rule() {
        assert_eq!(validate_expense(&json!({})).len(), 7);
    }

    #[test]
    fn test_empty_strings_rejected() {
        let mut raw = valid();
        raw["nombre"] = json!("");
        raw["estado"] = json!("");
        assert_eq!(
            validate_expense(&raw),
            vec![Violation::MissingName, Violation::MissingStatus]
        );
    }

    #[test]
    fn test_numbers_as_strings_rejected() {
        let mut raw = valid();
        raw["cantidad"] = json!("12.5");
        raw["categoriaId"] = json!("1");
        assert_eq!(
            validate_expense(&raw),
            vec![Violation::NonPositiveAmount, Violation::InvalidCategoryId]
        );
    }

    #[test]
    fn test_zero_references_rejected() {
        let mut raw = valid();
        raw["cantidad"] = json!(0);
        raw["metodoPagoId"] = json!(0);
        assert_eq!(
            validate_expense(&raw),
            vec![Violation::NonPositiveAmount, Violation::InvalidPaymentMethodId]
        );
    }

    #[test]
    fn test_date_is_pattern_only() {
        let mut raw = valid();
        raw["fecha"] = json!("2024-13-45");
        assert!(validate_expense(&raw).is_empty());

        for bad in ["2024-5-01", "2024-05-01T00:00:00", " 2024-05-01", "2024-05-01\n", "２０２４-05-01"] {
            raw["fecha"] = json!(bad);
            assert_eq!(validate_expense(&raw), vec![Violation::MalformedDate], "{bad}");
        }
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            Violation::MalformedDate.to_string(),
            "fecha debe estar en formato YYYY-MM-DD"
        );
        assert_eq!(
            Violation::NonPositiveAmount.to_string(),
            "cantidad debe ser un número positivo"
        );
    }
}
