//! Configuration management for flightmark.
//!
//! This module handles loading and saving configuration from `~/.flightmark/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LogConfig, PlaybackConfig, TrackingConfig};
