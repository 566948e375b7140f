//! Configuration module for fintrack
//!
//! Path resolution for the data directory and persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::{FintrackPaths, DATA_DIR_ENV};
pub use settings::Settings;
