//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{GastosError, GastosResult};
use crate::export::{export_bundle_json, export_bundle_yaml, export_expenses_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON bundle, re-importable
    Json,
    /// YAML bundle
    Yaml,
    /// Expenses only, spreadsheet-compatible
    Csv,
}

/// Write an export to `output`, or stdout when no path is given
pub fn handle_export_command(
    storage: &Storage,
    output: Option<PathBuf>,
    format: ExportFormat,
    pretty: bool,
) -> GastosResult<()> {
    match &output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| GastosError::Export(format!("Failed to create file: {}", e)))?;
            let mut writer = BufWriter::new(file);
            write_export(storage, &mut writer, format, pretty)?;
            writer
                .flush()
                .map_err(|e| GastosError::Export(e.to_string()))?;

            eprintln!("Exported {:?} to {}", format, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, &mut writer, format, pretty)?;
            writeln!(writer).map_err(|e| GastosError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> GastosResult<()> {
    match format {
        ExportFormat::Json => export_bundle_json(storage, writer, pretty),
        ExportFormat::Yaml => export_bundle_yaml(storage, writer),
        ExportFormat::Csv => export_expenses_csv(storage, writer),
    }
}
