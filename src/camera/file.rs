//! Camera backed by image files
//!
//! Stands in for a webcam device. The source is either a single image file,
//! or a directory whose images are played back in name order, one per grab,
//! wrapping around at the end.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::frame::{mime_for_extension, Frame};
use super::{Camera, FacingMode};
use crate::error::{CoggnifyError, CoggnifyResult};

/// A camera whose "video" is a set of still images on disk
#[derive(Debug)]
pub struct ImageFileCamera {
    source: Option<PathBuf>,
    frames: Vec<PathBuf>,
    cursor: usize,
}

impl ImageFileCamera {
    /// Create a camera for the given source; `None` means no device
    pub fn new(source: Option<PathBuf>) -> Self {
        Self {
            source,
            frames: Vec::new(),
            cursor: 0,
        }
    }
}

impl Camera for ImageFileCamera {
    fn open(&mut self, facing: FacingMode) -> CoggnifyResult<()> {
        let Some(source) = self.source.as_deref() else {
            warn!("No camera source configured");
            return Err(CoggnifyError::camera_unavailable());
        };

        let frames = discover_frames(source).map_err(|e| {
            warn!(source = %source.display(), error = %e, "Error accessing camera");
            CoggnifyError::camera_unavailable()
        })?;

        if frames.is_empty() {
            warn!(source = %source.display(), "Camera source has no frames");
            return Err(CoggnifyError::camera_unavailable());
        }

        // Files have no facing; the preference is only logged
        debug!(%facing, frames = frames.len(), "Camera stream bound");
        self.frames = frames;
        self.cursor = 0;
        info!("Camera started successfully");
        Ok(())
    }

    fn is_open(&self) -> bool {
        !self.frames.is_empty()
    }

    fn grab_frame(&mut self) -> CoggnifyResult<Frame> {
        let path = self
            .frames
            .get(self.cursor)
            .ok_or_else(|| CoggnifyError::Camera("Camera is not started".into()))?;

        let bytes = std::fs::read(path).map_err(|e| {
            CoggnifyError::Camera(format!("Failed to read frame {}: {}", path.display(), e))
        })?;

        let mime = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(mime_for_extension)
            .unwrap_or(super::frame::DEFAULT_MIME);

        self.cursor = (self.cursor + 1) % self.frames.len();
        Ok(Frame::new(bytes, mime))
    }

    fn release(&mut self) {
        if self.is_open() {
            debug!("Camera stream released");
        }
        self.frames.clear();
        self.cursor = 0;
    }
}

impl Drop for ImageFileCamera {
    fn drop(&mut self) {
        self.release();
    }
}

/// List the frames a source provides
fn discover_frames(source: &Path) -> std::io::Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(source)?;

    if metadata.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }

    let mut frames: Vec<PathBuf> = std::fs::read_dir(source)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .and_then(mime_for_extension)
                    .is_some()
        })
        .collect();

    frames.sort();
    Ok(frames)
}
