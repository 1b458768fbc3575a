//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (budget thresholds)

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
