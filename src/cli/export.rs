//! CLI commands for data export
//!
//! Provides commands for exporting the registry in various formats.

use crate::error::{CoggnifyError, CoggnifyResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full registry)
    Json,
    /// YAML format (full registry, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the owner and all horses to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export the horse roster to CSV
    Horses {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> CoggnifyResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(storage, &output, format, pretty),
        ExportCommands::Horses { output } => handle_export_horses(storage, &output),
        ExportCommands::Info => handle_export_info(storage),
    }
}

fn create_output(output: &Path) -> CoggnifyResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        CoggnifyError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle full export
fn handle_export_all(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> CoggnifyResult<()> {
    let mut writer = create_output(output)?;

    match format {
        ExportFormat::Json => json::export_full_json(storage, &mut writer, pretty)?,
        ExportFormat::Yaml => yaml::export_full_yaml(storage, &mut writer)?,
    }

    println!("Registry exported to: {}", output.display());
    Ok(())
}

/// Handle horse roster export
fn handle_export_horses(storage: &Storage, output: &Path) -> CoggnifyResult<()> {
    let writer = create_output(output)?;
    let count = csv::export_horses_csv(storage, writer)?;

    println!("Exported {} horses to: {}", count, output.display());
    Ok(())
}

/// Show export information
fn handle_export_info(storage: &Storage) -> CoggnifyResult<()> {
    let export = json::RegistryExport::from_storage(storage)?;

    println!("Export Information");
    println!("==================");
    println!("Schema Version: {}", export.schema_version);
    println!("App Version:    {}", export.app_version);
    println!();
    println!("Data Summary:");
    println!(
        "  Owner:        {}",
        export
            .owner
            .as_ref()
            .map(|o| o.id.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    println!("  Horses:       {}", export.metadata.horse_count);
    println!("  Microchipped: {}", export.metadata.microchipped_count);

    if let (Some(first), Some(last)) = (export.metadata.first_added, export.metadata.last_added) {
        println!();
        println!(
            "Horses added between {} and {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }

    Ok(())
}
