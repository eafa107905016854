//! Raw camera frames and their data URL encoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::models::CapturedImage;

/// MIME type used when the frame source does not tell us better
pub const DEFAULT_MIME: &str = "image/jpeg";

/// One frame read from a camera
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl Frame {
    /// Create a frame from encoded image bytes
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// Turn the frame into a captured still
    pub fn into_captured(self, now: DateTime<Utc>) -> CapturedImage {
        CapturedImage {
            data_url: self.to_data_url(),
            byte_len: self.bytes.len(),
            captured_at: now,
        }
    }
}

/// Guess an image MIME type from a file extension
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
