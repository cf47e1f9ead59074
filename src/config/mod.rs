//! Configuration module for gastos
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GastosPaths;
pub use settings::Settings;
