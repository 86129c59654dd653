//! Logger initialization.
//!
//! flightmark logs through the `log` facade; `env_logger` writes to stderr.

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "flightmark=debug"). It wins over `RUST_LOG`; `default_level` applies when
/// neither is set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Build a config from the `-v` count and the configured level name.
    ///
    /// Each `-v` raises the level one step above `warn`; with no `-v` the
    /// configured level is used as the fallback.
    #[must_use]
    pub fn from_verbosity(verbose: u8, configured: &str) -> Self {
        let filter = match verbose {
            0 => None,
            1 => Some("info".to_string()),
            2 => Some("debug".to_string()),
            _ => Some("trace".to_string()),
        };
        Self {
            filter,
            default_level: parse_level(configured).unwrap_or(LevelFilter::Warn),
            ..Self::default()
        }
    }
}

/// Parse a level name such as "warn" or "DEBUG".
#[must_use]
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);

        // A test harness or embedding app may already own the logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

/// Lowers the global max level while held and restores it on drop.
///
/// Used while the terminal is in raw mode on the alternate screen, where
/// stderr lines would be drawn over the UI.
#[must_use = "the cap is lifted as soon as the guard is dropped"]
pub struct LevelCap {
    previous: LevelFilter,
}

impl LevelCap {
    /// Cap logging at `level`. A lower current level is left alone.
    pub fn new(level: LevelFilter) -> Self {
        let previous = log::max_level();
        log::set_max_level(previous.min(level));
        Self { previous }
    }
}

impl Drop for LevelCap {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}
