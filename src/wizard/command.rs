//! User intents the wizard accepts

use super::step::WizardStep;
use crate::models::{HorseForm, LicenseSide, OwnerForm};

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Request camera access
    StartCamera,
    /// Snapshot one side of the license
    Capture(LicenseSide),
    /// Run the (simulated) license reader over both captures
    ProcessLicense,
    /// Submit the owner form
    CreateOwner(OwnerForm),
    /// Submit the horse form
    AddHorse(HorseForm),
    /// Done adding horses
    Finish,
    /// Regenerate the dashboard code
    RefreshCode,
}

impl Command {
    /// The only step on which the command is accepted
    pub fn step(&self) -> WizardStep {
        match self {
            Self::StartCamera | Self::Capture(_) | Self::ProcessLicense => WizardStep::Capture,
            Self::CreateOwner(_) => WizardStep::Confirm,
            Self::AddHorse(_) | Self::Finish => WizardStep::RegisterHorses,
            Self::RefreshCode => WizardStep::Dashboard,
        }
    }

    /// Short name for logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartCamera => "start camera",
            Self::Capture(LicenseSide::Front) => "capture front",
            Self::Capture(LicenseSide::Back) => "capture back",
            Self::ProcessLicense => "process license",
            Self::CreateOwner(_) => "create owner",
            Self::AddHorse(_) => "add horse",
            Self::Finish => "finish",
            Self::RefreshCode => "refresh code",
        }
    }
}
