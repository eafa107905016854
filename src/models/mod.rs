//! Core data models for Coggnify
//!
//! Owners, horses, the license images captured during onboarding and the
//! fields extracted from them.

pub mod horse;
pub mod ids;
pub mod license;
pub mod owner;

pub use horse::{Horse, HorseForm};
pub use ids::{HorseId, OwnerId};
pub use license::{CapturedImage, CapturedImages, ExtractedLicense, LicenseSide};
pub use owner::{Owner, OwnerForm};
