//! Configuration and settings management for cutplan
//!
//! Provides the machine parameters consumed by the toolpath compiler and the
//! configuration file that carries them. Supports JSON and TOML file formats;
//! the default location is a platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Machine parameters (feed, safe height, cut depth, tool diameter)
//! - Export preferences (default program file name)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name offered when the program is downloaded/exported.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "toolpath.gcode";

/// Machine parameters for one compilation run
///
/// Immutable while a program is being derived; replace the whole value to
/// change parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Cutting feed rate in mm/min (> 0)
    #[serde(alias = "feedRate")]
    pub feed_rate: f64,
    /// Z height at which rapid XY travel is safe, in mm (>= 0)
    #[serde(alias = "safeHeight")]
    pub safe_height: f64,
    /// Depth below the stock surface the tool plunges to, in mm (> 0)
    #[serde(alias = "cutDepth")]
    pub cut_depth: f64,
    /// Cutter diameter in mm (> 0)
    #[serde(alias = "toolDiameter")]
    pub tool_diameter: f64,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            feed_rate: 800.0,
            safe_height: 5.0,
            cut_depth: 2.0,
            tool_diameter: 3.175,
        }
    }
}

impl MachineSettings {
    /// Creates machine settings from explicit values.
    pub fn new(feed_rate: f64, safe_height: f64, cut_depth: f64, tool_diameter: f64) -> Self {
        Self {
            feed_rate,
            safe_height,
            cut_depth,
            tool_diameter,
        }
    }

    /// Offset applied for tool-radius compensation.
    pub fn tool_radius(&self) -> f64 {
        self.tool_diameter / 2.0
    }

    /// Validate machine parameters, reporting the first violated constraint.
    pub fn validate(&self) -> ConfigResult<()> {
        fn positive(key: &str, value: f64) -> ConfigResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value,
                    requirement: "must be > 0",
                })
            }
        }

        positive("machine.feed_rate", self.feed_rate)?;
        if !(self.safe_height.is_finite() && self.safe_height >= 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "machine.safe_height".to_string(),
                value: self.safe_height,
                requirement: "must be >= 0",
            });
        }
        positive("machine.cut_depth", self.cut_depth)?;
        positive("machine.tool_diameter", self.tool_diameter)?;
        Ok(())
    }
}

/// Export preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// File name used when saving a program without an explicit path
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Machine parameters
    #[serde(default)]
    pub machine: MachineSettings,
    /// Export preferences
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config_dir>/cutplan/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("cutplan").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("platform has no config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.machine.validate()?;

        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::MissingValue("export.file_name".to_string()));
        }

        Ok(())
    }
}
