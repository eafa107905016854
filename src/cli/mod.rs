//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod horse;
pub mod owner;
pub mod session;

pub use export::{handle_export_command, ExportCommands};
pub use horse::{handle_horse_command, HorseCommands};
pub use owner::{handle_owner_command, OwnerCommands};
pub use session::{
    handle_code_command, handle_dashboard_command, handle_history_command,
    handle_reset_command, handle_status_command,
};
