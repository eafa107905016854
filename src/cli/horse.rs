//! Horse CLI commands

use clap::Subcommand;

use crate::display::horse::format_horse_table;
use crate::error::CoggnifyResult;
use crate::models::HorseForm;
use crate::services::HorseService;
use crate::storage::Storage;

/// Horse subcommands
#[derive(Subcommand)]
pub enum HorseCommands {
    /// Register a horse under the current owner
    Add {
        /// Horse name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Breed
        #[arg(short, long, default_value = "")]
        breed: String,
        /// Coat color
        #[arg(short, long, default_value = "")]
        color: String,
        /// Microchip number
        #[arg(short, long)]
        microchip: Option<String>,
    },
    /// List registered horses
    List,
}

/// Handle a horse command
pub fn handle_horse_command(storage: &Storage, cmd: HorseCommands) -> CoggnifyResult<()> {
    let service = HorseService::new(storage);

    match cmd {
        HorseCommands::Add {
            name,
            breed,
            color,
            microchip,
        } => {
            let mut form = HorseForm::new(name, breed, color);
            if let Some(chip) = microchip {
                form = form.with_microchip(chip);
            }

            let horse = service.add_for_current_owner(form)?;
            println!("Added horse: {}", horse.name);
            println!("  ID: {}", horse.id);
            if horse.owner_id.is_empty() {
                println!("Note: no owner is registered; the horse has no owner id.");
            }
        }

        HorseCommands::List => {
            let horses = service.list()?;
            println!("{}", format_horse_table(&horses));
        }
    }

    Ok(())
}
