//! Camera access and still capture
//!
//! The wizard talks to a [`Camera`] trait object. Capturing a side snapshots
//! the camera's current frame and keeps it as a base64 data URL, the same
//! text form a browser canvas produces.

pub mod file;
pub mod frame;

pub use file::ImageFileCamera;
pub use frame::Frame;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoggnifyResult;
use crate::models::CapturedImage;

/// Which way the requested camera should face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Rear camera, pointed away from the user (preferred for documents)
    #[default]
    Environment,
    /// Front camera
    User,
}

impl std::fmt::Display for FacingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacingMode::Environment => write!(f, "environment"),
            FacingMode::User => write!(f, "user"),
        }
    }
}

/// A source of video frames
///
/// `open` is the permission request: it fails with
/// [`CoggnifyError::Camera`](crate::error::CoggnifyError::Camera) when access
/// is denied or no device exists. Implementations are not expected to retry.
pub trait Camera {
    /// Request access, preferring the given facing mode
    fn open(&mut self, facing: FacingMode) -> CoggnifyResult<()>;

    /// Whether a live stream is bound
    fn is_open(&self) -> bool;

    /// Grab whatever the stream is currently showing
    fn grab_frame(&mut self) -> CoggnifyResult<Frame>;

    /// Stop the stream
    fn release(&mut self);
}

/// Snapshot the camera's current frame as a still image
pub fn capture_still(camera: &mut dyn Camera, now: DateTime<Utc>) -> CoggnifyResult<CapturedImage> {
    let frame = camera.grab_frame()?;
    Ok(frame.into_captured(now))
}
