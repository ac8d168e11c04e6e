//! cutplan Settings Crate
//!
//! Handles machine parameters and configuration file persistence.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings, MachineSettings, DEFAULT_EXPORT_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
