//! Everything the wizard renders from
//!
//! Views read this and nothing else.

use super::step::WizardStep;
use crate::models::{CapturedImages, ExtractedLicense, Horse, LicenseSide, Owner, OwnerForm};
use crate::verification::VerificationCode;

/// Snapshot of the onboarding flow
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub step: WizardStep,

    /// Whether the camera stream is live
    pub camera_active: bool,

    /// Front/back stills captured so far
    pub images: CapturedImages,

    /// A license read is running in the background
    pub processing: bool,

    /// Last record read off the license
    pub extracted: Option<ExtractedLicense>,

    /// Values the owner form starts with
    pub owner_prefill: OwnerForm,

    pub owner: Option<Owner>,

    /// Registered horses in insertion order
    pub horses: Vec<Horse>,

    /// Current dashboard code
    pub code: Option<VerificationCode>,

    /// One-shot message for the user, shown as an alert
    pub notice: Option<String>,
}

impl WizardState {
    /// Capture buttons are shown once the stream is live
    pub fn can_capture(&self) -> bool {
        self.step == WizardStep::Capture && self.camera_active
    }

    /// The process button is shown once both sides are captured
    pub fn can_process(&self) -> bool {
        self.step == WizardStep::Capture && self.images.is_complete()
    }

    /// Label of the process button
    pub fn process_label(&self) -> &'static str {
        if self.processing {
            "Processing..."
        } else {
            "Process License"
        }
    }

    /// "Front Captured ✓" style marker for a captured side
    pub fn capture_marker(&self, side: LicenseSide) -> Option<String> {
        self.images
            .has(side)
            .then(|| format!("{} Captured \u{2713}", side))
    }

    /// Finishing needs at least one horse
    pub fn can_finish(&self) -> bool {
        self.step == WizardStep::RegisterHorses && !self.horses.is_empty()
    }

    /// Take the pending notice, leaving none
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
