//! Payment method CLI commands

use clap::Subcommand;

use crate::display::{format_payment_method_details, format_payment_method_list};
use crate::error::GastosResult;
use crate::services::PaymentMethodService;
use crate::storage::Storage;

/// Payment method subcommands
#[derive(Subcommand)]
pub enum MethodCommands {
    /// List all payment methods
    List,

    /// Show payment method details
    Show {
        /// Method name or ID
        method: String,
    },

    /// Create a new payment method
    Add {
        /// Method name (must be unique)
        nombre: String,
        #[arg(short, long, default_value = "")]
        descripcion: String,
        #[arg(short, long, default_value = "")]
        icono: String,
    },
}

pub fn handle_method_command(storage: &Storage, cmd: MethodCommands) -> GastosResult<()> {
    let service = PaymentMethodService::new(storage);

    match cmd {
        MethodCommands::List => {
            println!("{}", format_payment_method_list(&service.list()?));
        }
        MethodCommands::Show { method } => {
            print!("{}", format_payment_method_details(&service.require(&method)?));
        }
        MethodCommands::Add {
            nombre,
            descripcion,
            icono,
        } => {
            let method = service.create(&nombre, &descripcion, &icono)?;
            println!("Created payment method: {}", method);
            println!("  ID: {}", method.id);
        }
    }

    Ok(())
}
