//! Configuration module for Coggnify
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CoggnifyPaths;
pub use settings::Settings;
