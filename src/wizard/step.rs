//! Wizard steps

use std::fmt;

/// One screen of the onboarding flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum WizardStep {
    #[default]
    Capture,
    Confirm,
    RegisterHorses,
    Dashboard,
}

impl WizardStep {
    /// All steps in flow order
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Capture,
        WizardStep::Confirm,
        WizardStep::RegisterHorses,
        WizardStep::Dashboard,
    ];

    /// 1-based position in the flow
    pub fn number(&self) -> usize {
        match self {
            Self::Capture => 1,
            Self::Confirm => 2,
            Self::RegisterHorses => 3,
            Self::Dashboard => 4,
        }
    }

    /// Heading shown for the step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Capture => "Scan Driver's License",
            Self::Confirm => "Confirm Owner Details",
            Self::RegisterHorses => "Register Your Horses",
            Self::Dashboard => "Owner Dashboard",
        }
    }

    /// The step after this one; Dashboard is terminal
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Capture => Some(Self::Confirm),
            Self::Confirm => Some(Self::RegisterHorses),
            Self::RegisterHorses => Some(Self::Dashboard),
            Self::Dashboard => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}
