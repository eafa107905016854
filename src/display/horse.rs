//! Horse display formatting
//!
//! Two renderings: plain cards, one per horse, as the dashboard shows them,
//! and a table for the CLI.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Horse;

#[derive(Tabled)]
struct HorseRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Breed")]
    breed: &'a str,
    #[tabled(rename = "Color")]
    color: &'a str,
    #[tabled(rename = "Microchip")]
    microchip: &'a str,
}

/// Horses as a table
pub fn format_horse_table(horses: &[Horse]) -> String {
    if horses.is_empty() {
        return "No horses registered.".to_string();
    }

    let rows = horses.iter().map(|h| HorseRow {
        id: h.id.as_str(),
        name: &h.name,
        breed: &h.breed,
        color: &h.color,
        microchip: h.microchip_id.as_deref().unwrap_or(""),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// One horse as a card; the microchip line only appears when there is one
pub fn format_horse_card(horse: &Horse) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", horse.name));
    output.push_str(&format!("  Breed: {}\n", horse.breed));
    output.push_str(&format!("  Color: {}\n", horse.color));
    if let Some(chip) = &horse.microchip_id {
        output.push_str(&format!("  Microchip: {}\n", chip));
    }

    output
}

/// All horses as cards
pub fn format_horse_cards(horses: &[Horse]) -> String {
    horses
        .iter()
        .map(format_horse_card)
        .collect::<Vec<_>>()
        .join("\n")
}
