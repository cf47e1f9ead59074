//! CLI command that empties the database

use dialoguer::Confirm;

use crate::error::{GastosError, GastosResult};
use crate::storage::Storage;

/// Clear every collection, asking first unless `yes` is set
pub fn handle_reset_command(storage: &Storage, yes: bool) -> GastosResult<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete all categories, payment methods and expenses?")
            .default(false)
            .interact()
            .map_err(|e| GastosError::Io(e.to_string()))?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let cleared = storage.clear_all()?;
    println!("Database cleared.");
    println!("  Categories removed:      {}", cleared.categories);
    println!("  Payment methods removed: {}", cleared.payment_methods);
    println!("  Expenses removed:        {}", cleared.expenses);

    Ok(())
}
