//! CSV Export functionality
//!
//! Exports the horse roster in a spreadsheet-friendly form.

use crate::error::{CoggnifyError, CoggnifyResult};
use crate::storage::Storage;
use std::io::Write;

/// Column headers of the roster export
pub const HORSE_CSV_HEADER: [&str; 7] = [
    "ID",
    "Name",
    "Breed",
    "Color",
    "Microchip",
    "Owner ID",
    "Added At",
];

/// Export all horses to CSV
pub fn export_horses_csv<W: Write>(storage: &Storage, writer: W) -> CoggnifyResult<usize> {
    let horses = storage.horses.get_all()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HORSE_CSV_HEADER)
        .map_err(|e| CoggnifyError::Export(e.to_string()))?;

    for horse in &horses {
        let added_at = horse.added_at.to_rfc3339();
        csv_writer
            .write_record([
                horse.id.as_str(),
                horse.name.as_str(),
                horse.breed.as_str(),
                horse.color.as_str(),
                horse.microchip_id.as_deref().unwrap_or(""),
                horse.owner_id.as_str(),
                added_at.as_str(),
            ])
            .map_err(|e| CoggnifyError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CoggnifyError::Export(e.to_string()))?;
    Ok(horses.len())
}
