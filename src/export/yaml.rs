//! YAML export
//!
//! Same bundle as the JSON export, for reading and diffing by hand.

use std::io::Write;

use crate::error::{GastosError, GastosResult};
use crate::export::json::ExportBundle;
use crate::storage::Storage;

/// Export the whole store as YAML
pub fn export_bundle_yaml<W: Write>(storage: &Storage, writer: &mut W) -> GastosResult<()> {
    let bundle = ExportBundle::from_storage(storage)?;

    write!(
        writer,
        "# gastos export\n# Generated: {}\n\n",
        chrono::Utc::now().to_rfc3339()
    )
    .map_err(|e| GastosError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &bundle).map_err(|e| GastosError::Export(e.to_string()))?;

    Ok(())
}
