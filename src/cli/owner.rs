//! Owner CLI commands

use clap::Subcommand;

use crate::display::owner::format_owner_details;
use crate::error::{CoggnifyError, CoggnifyResult};
use crate::models::OwnerForm;
use crate::services::OwnerService;
use crate::storage::Storage;

/// Owner subcommands
#[derive(Subcommand)]
pub enum OwnerCommands {
    /// Create the owner account
    Create {
        /// Full name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Contact phone
        #[arg(short, long, default_value = "")]
        phone: String,
        /// Postal address
        #[arg(short, long, default_value = "")]
        address: String,
    },
    /// Show the owner account
    Show,
}

/// Handle an owner command
pub fn handle_owner_command(storage: &Storage, cmd: OwnerCommands) -> CoggnifyResult<()> {
    let service = OwnerService::new(storage);

    match cmd {
        OwnerCommands::Create {
            name,
            phone,
            address,
        } => {
            let replaced = service.get()?.is_some();
            let owner = service.create(OwnerForm::new(name, phone, address))?;

            println!("Created owner: {}", owner.name);
            println!("  ID: {}", owner.id);
            if replaced {
                println!("Note: the previous owner was replaced.");
            }
        }

        OwnerCommands::Show => {
            let owner = service
                .get()?
                .ok_or_else(|| CoggnifyError::owner_not_found("no owner registered"))?;
            print!("{}", format_owner_details(&owner));
        }
    }

    Ok(())
}
