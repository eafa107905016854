//! Placeholder license reader
//!
//! Ignores the images entirely. Kept deliberately obvious so nobody mistakes
//! it for extraction.

use tracing::info;

use super::LicenseReader;
use crate::error::CoggnifyResult;
use crate::models::{CapturedImages, ExtractedLicense};

pub const SIMULATED_NAME: &str = "JOHN DOE";
pub const SIMULATED_LICENSE_NUMBER: &str = "123456789";
pub const SIMULATED_STATE: &str = "TX";
pub const SIMULATED_ADDRESS: &str = "123 MAIN ST DALLAS TX";

/// Returns a hard-coded license record
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLicenseReader;

impl SimulatedLicenseReader {
    /// The record every read produces
    pub fn record() -> ExtractedLicense {
        ExtractedLicense {
            name: SIMULATED_NAME.to_string(),
            license_number: SIMULATED_LICENSE_NUMBER.to_string(),
            state: SIMULATED_STATE.to_string(),
            address: SIMULATED_ADDRESS.to_string(),
        }
    }
}

impl LicenseReader for SimulatedLicenseReader {
    fn read(&self, _images: &CapturedImages) -> CoggnifyResult<ExtractedLicense> {
        info!("Processing license images (simulated)");
        Ok(Self::record())
    }
}
