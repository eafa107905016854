//! Coggnify X - horse owner registration
//!
//! A four-step onboarding wizard: photograph a driver's license, confirm the
//! owner details read from it, register one or more horses, then land on a
//! dashboard showing a rolling verification code.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Owners, horses and license captures
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Registration operations on top of storage
//! - `camera`: Camera access and still capture
//! - `ocr`: License reading (simulated) and the background processing task
//! - `verification`: The time-windowed display code
//! - `wizard`: The step state machine
//! - `display`, `export`, `cli`, `tui`: Front ends
//!
//! # Example
//!
//! ```rust,ignore
//! use coggnify::config::{paths::CoggnifyPaths, settings::Settings};
//! use coggnify::storage::Storage;
//! use coggnify::wizard::Wizard;
//!
//! let paths = CoggnifyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let wizard = Wizard::from_settings(&storage, &settings)?;
//! ```

pub mod audit;
pub mod camera;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod ocr;
pub mod services;
pub mod storage;
pub mod tui;
pub mod verification;
pub mod wizard;

pub use error::CoggnifyError;
