//! The four-step onboarding flow
//!
//! Capture the license, confirm the owner, register horses, then land on the
//! dashboard. Transitions only go forward; a returning user with a saved
//! registration starts on the dashboard.

pub mod command;
pub mod controller;
pub mod state;
pub mod step;

pub use command::Command;
pub use controller::{Wizard, LICENSE_PROCESSED_NOTICE};
pub use state::WizardState;
pub use step::WizardStep;
