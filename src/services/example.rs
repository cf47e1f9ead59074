//! Example bundle generator
//!
//! Produces a realistic bundle to try the importer with: five fixed
//! categories, four fixed payment methods, and daily expenses for the last
//! four months following a per-category spending pattern.

use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::export::ExportBundle;
use crate::models::{
    Category, CategoryId, Expense, ExpenseId, ExpenseStatus, PaymentMethod, PaymentMethodId,
};

/// How often and how much one category spends
struct Pattern {
    /// Chance that the category spends at all on a given day
    daily_probability: f64,
    min_count: u32,
    max_count: u32,
    min_price: f64,
    max_price: f64,
    names: &'static [&'static str],
    descriptions: &'static [&'static str],
}

const CATEGORIES: [(&str, &str, &str, &str); 5] = [
    ("Alimentación", "Gastos de alimentación", "red", "🍔"),
    ("Transporte", "Gastos de transporte", "blue", "🚗"),
    ("Hogar", "Gastos de hogar", "green", "🏠"),
    ("Salud", "Gastos de salud", "yellow", "🏥"),
    ("Educación", "Gastos de educación", "purple", "🎓"),
];

const PAYMENT_METHODS: [(&str, &str, &str); 4] = [
    ("Efectivo", "Gastos en efectivo", "💰"),
    ("Tarjeta de crédito", "Gastos en tarjeta de crédito", "💳"),
    ("Transferencia", "Gastos en transferencia", "💸"),
    ("Cheque", "Gastos en cheque", "💰"),
];

/// Indexed like `CATEGORIES`
const PATTERNS: [Pattern; 5] = [
    Pattern {
        daily_probability: 0.9,
        min_count: 1,
        max_count: 3,
        min_price: 5.0,
        max_price: 50.0,
        names: &[
            "Desayuno en casa",
            "Almuerzo en restaurante",
            "Cena familiar",
            "Compra de supermercado",
            "Café de la mañana",
            "Snack de la tarde",
            "Comida rápida",
            "Fruta del mercado",
            "Pan de la panadería",
        ],
        descriptions: &[
            "Comida diaria",
            "Compra semanal de alimentos",
            "Comida fuera de casa",
            "Ingredientes para cocinar",
            "Productos frescos del mercado",
        ],
    },
    Pattern {
        daily_probability: 0.7,
        min_count: 0,
        max_count: 2,
        min_price: 2.0,
        max_price: 25.0,
        names: &[
            "Taxi al trabajo",
            "Metro urbano",
            "Gasolina del auto",
            "Uber al centro",
            "Bus interurbano",
            "Estacionamiento",
            "Peaje de autopista",
            "Bicicleta compartida",
        ],
        descriptions: &[
            "Desplazamiento diario",
            "Viaje de trabajo",
            "Transporte público",
            "Combustible para el vehículo",
            "Movilidad urbana",
        ],
    },
    Pattern {
        daily_probability: 0.2,
        min_count: 0,
        max_count: 1,
        min_price: 15.0,
        max_price: 120.0,
        names: &[
            "Luz del mes",
            "Agua del mes",
            "Gas natural",
            "Internet y teléfono",
            "Limpieza del hogar",
            "Reparación electrodoméstico",
            "Decoración",
            "Mantenimiento jardín",
        ],
        descriptions: &[
            "Servicios básicos del hogar",
            "Mantenimiento de la casa",
            "Suministros domésticos",
            "Mejoras del hogar",
            "Servicios del hogar",
        ],
    },
    Pattern {
        daily_probability: 0.05,
        min_count: 0,
        max_count: 1,
        min_price: 30.0,
        max_price: 200.0,
        names: &[
            "Consulta médica",
            "Medicamentos",
            "Exámenes de laboratorio",
            "Farmacia",
            "Dentista",
            "Seguro médico",
            "Vitaminas",
            "Consulta especialista",
        ],
        descriptions: &[
            "Cuidado de la salud",
            "Tratamiento médico",
            "Prevención y bienestar",
            "Atención médica",
            "Salud personal",
        ],
    },
    Pattern {
        daily_probability: 0.08,
        min_count: 0,
        max_count: 1,
        min_price: 50.0,
        max_price: 300.0,
        names: &[
            "Curso online",
            "Libros de texto",
            "Material escolar",
            "Clases particulares",
            "Certificación profesional",
            "Seminario",
            "Suscripción educativa",
            "Software educativo",
        ],
        descriptions: &[
            "Desarrollo profesional",
            "Aprendizaje continuo",
            "Formación académica",
            "Crecimiento personal",
            "Educación y capacitación",
        ],
    },
];

/// Months of history the generator covers
pub const EXAMPLE_MONTHS: u32 = 4;

/// Generates example bundles
pub struct ExampleGenerator {
    rng: StdRng,
}

impl ExampleGenerator {
    /// Generator with a fixed seed, for reproducible output
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Build a bundle covering the months up to and including `today`
    pub fn generate(&mut self, today: NaiveDate) -> ExportBundle {
        let categories: Vec<Category> = CATEGORIES
            .iter()
            .zip(1u64..)
            .map(|(&(name, description, color, icon), id)| {
                let mut category = Category::new(name, description, color, icon);
                category.id = CategoryId::new(id);
                category
            })
            .collect();

        let payment_methods: Vec<PaymentMethod> = PAYMENT_METHODS
            .iter()
            .zip(1u64..)
            .map(|(&(name, description, icon), id)| {
                let mut method = PaymentMethod::new(name, description, icon);
                method.id = PaymentMethodId::new(id);
                method
            })
            .collect();

        let start = today
            .checked_sub_months(Months::new(EXAMPLE_MONTHS))
            .unwrap_or(today);

        let mut expenses = Vec::new();
        let mut next_id = 1u64;
        for date in start.iter_days().take_while(|d| *d <= today) {
            let date = date.format("%Y-%m-%d").to_string();

            for (category, pattern) in categories.iter().zip(PATTERNS.iter()) {
                if !self.rng.gen_bool(pattern.daily_probability) {
                    continue;
                }

                let count = self.rng.gen_range(pattern.min_count..=pattern.max_count);
                for _ in 0..count {
                    let mut expense = self.expense(pattern, &date, category.id, &payment_methods);
                    expense.id = ExpenseId::new(next_id);
                    next_id += 1;
                    expenses.push(expense);
                }
            }
        }
        expenses.sort_by(|a, b| a.date.cmp(&b.date));

        ExportBundle {
            categories,
            payment_methods,
            expenses,
        }
    }

    fn expense(
        &mut self,
        pattern: &Pattern,
        date: &str,
        category_id: CategoryId,
        payment_methods: &[PaymentMethod],
    ) -> Expense {
        let name = pattern.names[self.rng.gen_range(0..pattern.names.len())];
        let description = pattern.descriptions[self.rng.gen_range(0..pattern.descriptions.len())];
        let method = &payment_methods[self.rng.gen_range(0..payment_methods.len())];
        let amount = self.rng.gen_range(pattern.min_price..=pattern.max_price);
        let statuses = ExpenseStatus::all();
        let status = statuses[self.rng.gen_range(0..statuses.len())];

        Expense::new(
            name,
            description,
            (amount * 100.0).round() / 100.0,
            date,
            category_id,
            method.id,
            status.as_str(),
        )
    }
}
