//! Path management for gastos
//!
//! ## Path Resolution Order
//!
//! 1. `GASTOS_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/gastos` on Linux, `~/Library/Application Support/gastos`
//!    on macOS, `%APPDATA%\gastos\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GastosError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "GASTOS_DATA_DIR";

/// Manages all paths used by gastos
#[derive(Debug, Clone)]
pub struct GastosPaths {
    /// Base directory for all gastos data
    base_dir: PathBuf,
}

impl GastosPaths {
    /// Create a new GastosPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, GastosError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "gastos")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    GastosError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create GastosPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categorias.json")
    }

    pub fn payment_methods_file(&self) -> PathBuf {
        self.data_dir().join("metodos_pago.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("gastos.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), GastosError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GastosError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GastosError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
