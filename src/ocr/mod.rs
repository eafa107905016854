//! License reading
//!
//! There is no real OCR here. [`SimulatedLicenseReader`] returns the same
//! fixed record whatever the photos show, and [`ProcessingTask`] supplies the
//! artificial delay on a background thread. A real OCR backend would plug in
//! behind [`LicenseReader`].

pub mod simulated;
pub mod task;

pub use simulated::SimulatedLicenseReader;
pub use task::{ProcessingTask, TaskPoll};

use crate::error::CoggnifyResult;
use crate::models::{CapturedImages, ExtractedLicense};

/// Turns a captured front/back pair into license fields
pub trait LicenseReader: Send + Sync {
    fn read(&self, images: &CapturedImages) -> CoggnifyResult<ExtractedLicense>;
}
