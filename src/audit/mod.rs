//! Audit logging system for gastos
//!
//! Records every row created (manually or by an import) and every reset in
//! an append-only, line-delimited JSON log.
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Category, &category))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
