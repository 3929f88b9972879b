//! Odontokit Settings Crate
//!
//! Handles application configuration: defaults, validation and persistence
//! of editor and diagram settings.

pub mod config;
pub mod error;

pub use config::{Config, DiagramSettings, EditorConfig};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
