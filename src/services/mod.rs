//! Service layer for Coggnify
//!
//! The service layer provides the registration operations on top of the
//! storage layer: synthesizing ids and timestamps, persisting, and recording
//! audit entries.

pub mod horse;
pub mod owner;
pub mod session;

pub use horse::HorseService;
pub use owner::OwnerService;
pub use session::{ResetSummary, SessionService};
