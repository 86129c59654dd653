//! Configuration settings for flightmark.
//!
//! Settings are loaded from `~/.flightmark/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::core::{TrackingMode, DEFAULT_ESTIMATE_RATIO, DEFAULT_FRAME_RATE};
use crate::error::FlightmarkError;
use crate::logging::parse_level;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Point tracking settings.
    pub tracking: TrackingConfig,
    /// Playhead settings for the interactive marker.
    pub playback: PlaybackConfig,
    /// Logging settings.
    pub logging: LogConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Point tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Mode a new session starts in.
    #[serde(default)]
    pub default_mode: TrackingMode,
    /// Calibration ratio for the simple-mode estimate.
    #[serde(default = "default_estimate_ratio")]
    pub estimate_ratio: f64,
}

/// Playhead settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Frame rate used to approximate one frame step.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    /// Seconds moved by a seek key press.
    #[serde(default = "default_seek_step")]
    pub seek_step_seconds: f64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level used when neither `-v` nor `RUST_LOG` is given.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_estimate_ratio() -> f64 {
    DEFAULT_ESTIMATE_RATIO
}

const fn default_frame_rate() -> f64 {
    DEFAULT_FRAME_RATE
}

const fn default_seek_step() -> f64 {
    1.0
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            default_mode: TrackingMode::default(),
            estimate_ratio: default_estimate_ratio(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            seek_step_seconds: default_seek_step(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, FlightmarkError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// holds values outside their valid range.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FlightmarkError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FlightmarkError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FlightmarkError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Check numeric settings and the log level name.
    ///
    /// # Errors
    ///
    /// Returns `FlightmarkError::Config` naming the first bad value.
    pub fn validate(&self) -> Result<(), FlightmarkError> {
        let positive = [
            ("tracking.estimate_ratio", self.tracking.estimate_ratio),
            ("playback.frame_rate", self.playback.frame_rate),
            ("playback.seek_step_seconds", self.playback.seek_step_seconds),
        ];

        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(FlightmarkError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if parse_level(&self.logging.level).is_none() {
            return Err(FlightmarkError::Config(format!(
                "logging.level must be one of off, error, warn, info, debug, trace; got '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), FlightmarkError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FlightmarkError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FlightmarkError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            FlightmarkError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
