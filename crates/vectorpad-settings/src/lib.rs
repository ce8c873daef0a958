//! VectorPad Settings Crate
//!
//! Loads, validates and saves editor configuration.

pub mod config;
pub mod error;

pub use config::{ConfigFormat, EditingSettings, EditorConfig, ViewportSettings};
pub use error::{SettingsError, SettingsResult};
