//! gastos - personal expense tracker with bundle import
//!
//! This library provides the core of the `gastos` command line tool: a local
//! store of categories, payment methods and expenses, and an importer that
//! reconciles exported bundles into that store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, payment methods, expenses)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `import`: Bundle import stages (format detection, merge, validation)
//! - `services`: Business logic layer
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos::config::paths::GastosPaths;
//! use gastos::import::NoProgress;
//! use gastos::services::ImportService;
//! use gastos::storage::Storage;
//!
//! let mut storage = Storage::new(GastosPaths::new()?)?;
//! storage.load_all()?;
//!
//! let text = std::fs::read_to_string("gastos.json")?;
//! let report = ImportService::new(&storage).import_str(&text, &mut NoProgress)?;
//! storage.save_all()?;
//! println!("{} gastos importados", report.success);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{GastosError, GastosResult};
