//! Category CLI commands

use clap::Subcommand;

use crate::display::{format_category_details, format_category_list};
use crate::error::GastosResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Create a new category
    Add {
        /// Category name (must be unique)
        nombre: String,
        #[arg(short, long, default_value = "")]
        descripcion: String,
        #[arg(short, long, default_value = "")]
        color: String,
        #[arg(short, long, default_value = "")]
        icono: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> GastosResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            println!("{}", format_category_list(&categories));
        }

        CategoryCommands::Show { category } => {
            print!("{}", format_category_details(&service.require(&category)?));
        }

        CategoryCommands::Add {
            nombre,
            descripcion,
            color,
            icono,
        } => {
            let category = service.create(&nombre, &descripcion, &color, &icono)?;
            println!("Created category: {}", category);
            println!("  ID: {}", category.id);
        }
    }

    Ok(())
}
