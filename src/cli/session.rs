//! Session CLI commands
//!
//! Read-only views of the wizard state (code, dashboard, status, history)
//! and the reset command.

use chrono::Utc;

use crate::config::settings::Settings;
use crate::display::dashboard::{format_code, format_dashboard};
use crate::error::CoggnifyResult;
use crate::services::SessionService;
use crate::storage::Storage;
use crate::verification::VerificationCode;
use crate::wizard::{Wizard, WizardStep};

/// Print the current verification code
pub fn handle_code_command() -> CoggnifyResult<()> {
    let now = Utc::now();
    println!("{}", format_code(&VerificationCode::at(now), now));
    Ok(())
}

/// Print the dashboard, or why it is not reachable yet
pub fn handle_dashboard_command(storage: &Storage) -> CoggnifyResult<()> {
    let owner = storage.owner.get()?.filter(|o| o.has_id());
    let horses = storage.horses.get_all()?;

    match owner {
        None => {
            println!("No owner registered yet.");
            println!("Run 'coggnify tui' or 'coggnify owner create' to register.");
        }
        Some(_) if horses.is_empty() => {
            println!("No horses registered yet.");
            println!("Run 'coggnify horse add' to register your first horse.");
        }
        Some(owner) => {
            let now = Utc::now();
            print!(
                "{}",
                format_dashboard(&owner, &horses, &VerificationCode::at(now), now)
            );
        }
    }

    Ok(())
}

/// Print the step the wizard would resume on
pub fn handle_status_command(storage: &Storage, settings: &Settings) -> CoggnifyResult<()> {
    let wizard = Wizard::from_settings(storage, settings)?;
    let state = wizard.state();

    println!("Current step: {}", wizard.step());
    for step in WizardStep::ALL {
        let marker = if step == wizard.step() { ">" } else { " " };
        println!("  {} {}. {}", marker, step.number(), step.title());
    }
    println!();
    println!(
        "Owner:  {}",
        state
            .owner
            .as_ref()
            .map(|o| o.id.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    println!("Horses: {}", state.horses.len());

    Ok(())
}

/// Print recent audit entries
pub fn handle_history_command(storage: &Storage, limit: usize) -> CoggnifyResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

/// Delete the stored owner and horses
pub fn handle_reset_command(storage: &Storage, yes: bool) -> CoggnifyResult<()> {
    if !yes {
        println!("This deletes the stored owner and all horses.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    let summary = SessionService::new(storage).reset()?;
    println!(
        "Session reset: {} owner, {} horses removed.",
        if summary.owner_removed { 1 } else { 0 },
        summary.horses_removed
    );
    Ok(())
}
