//! Driver's license capture and extraction models
//!
//! Captured images live only in memory for the lifetime of the process and
//! are never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the license a photo shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseSide {
    Front,
    Back,
}

impl LicenseSide {
    /// Lowercase key used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for LicenseSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "Front"),
            Self::Back => write!(f, "Back"),
        }
    }
}

/// A still image snapped from the camera
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// `data:<mime>;base64,<payload>` text form of the frame
    pub data_url: String,

    /// Size of the raw frame in bytes
    pub byte_len: usize,

    pub captured_at: DateTime<Utc>,
}

impl CapturedImage {
    /// MIME type embedded in the data URL
    pub fn mime_type(&self) -> Option<&str> {
        self.data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
    }
}

/// The front/back image pair held while the wizard is on the capture step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedImages {
    pub front: Option<CapturedImage>,
    pub back: Option<CapturedImage>,
}

impl CapturedImages {
    /// Store an image for a side, replacing any earlier capture
    pub fn insert(&mut self, side: LicenseSide, image: CapturedImage) {
        match side {
            LicenseSide::Front => self.front = Some(image),
            LicenseSide::Back => self.back = Some(image),
        }
    }

    /// Get the image captured for a side
    pub fn get(&self, side: LicenseSide) -> Option<&CapturedImage> {
        match side {
            LicenseSide::Front => self.front.as_ref(),
            LicenseSide::Back => self.back.as_ref(),
        }
    }

    /// Whether a side has been captured
    pub fn has(&self, side: LicenseSide) -> bool {
        self.get(side).is_some()
    }

    /// Both sides are present, so the license can be processed
    pub fn is_complete(&self) -> bool {
        self.front.is_some() && self.back.is_some()
    }
}

/// Fields read off a driver's license
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLicense {
    pub name: String,
    pub license_number: String,
    pub state: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str) -> CapturedImage {
        CapturedImage {
            data_url: url.to_string(),
            byte_len: 3,
            captured_at: Utc::now(),
        }
    }

    #[test]
    fn test_complete_only_with_both_sides() {
        let mut images = CapturedImages::default();
        assert!(!images.is_complete());

        images.insert(LicenseSide::Front, image("data:image/jpeg;base64,AAA"));
        assert!(images.has(LicenseSide::Front));
        assert!(!images.is_complete());

        images.insert(LicenseSide::Back, image("data:image/jpeg;base64,BBB"));
        assert!(images.is_complete());
    }

    #[test]
    fn test_recapture_replaces() {
        let mut images = CapturedImages::default();
        images.insert(LicenseSide::Front, image("data:image/jpeg;base64,AAA"));
        images.insert(LicenseSide::Front, image("data:image/png;base64,CCC"));

        let front = images.get(LicenseSide::Front).unwrap();
        assert_eq!(front.mime_type(), Some("image/png"));
    }
}
