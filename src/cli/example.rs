//! CLI command that writes an example bundle

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::error::{GastosError, GastosResult};
use crate::export::write_bundle_json;
use crate::services::ExampleGenerator;

/// Generate an example bundle into `output`, or stdout
pub fn handle_example_command(output: Option<PathBuf>, seed: Option<u64>) -> GastosResult<()> {
    let mut generator = match seed {
        Some(seed) => ExampleGenerator::seeded(seed),
        None => ExampleGenerator::from_entropy(),
    };
    let bundle = generator.generate(Local::now().date_naive());

    match output {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|e| GastosError::Export(format!("Failed to create file: {}", e)))?;
            let mut writer = BufWriter::new(file);
            write_bundle_json(&bundle, &mut writer, true)?;
            writer
                .flush()
                .map_err(|e| GastosError::Export(e.to_string()))?;

            eprintln!(
                "Example written to {}: {} categories, {} payment methods, {} expenses",
                path.display(),
                bundle.categories.len(),
                bundle.payment_methods.len(),
                bundle.expenses.len()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_bundle_json(&bundle, &mut writer, true)?;
            writeln!(writer).map_err(|e| GastosError::Export(e.to_string()))?;
        }
    }

    Ok(())
}
