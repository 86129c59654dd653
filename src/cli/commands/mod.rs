//! Command implementations for flightmark.
//!
//! Each command returns the text to print; `main` does the printing.

mod calc;
mod config;
mod mark;
mod replay;

pub use calc::calc;
pub use config::config;
pub use mark::mark;
pub use replay::replay;

use clap_complete::Shell;

use crate::cli::args::TrackingArgs;
use crate::config::Config;
use crate::core::{Calculator, TrackingMode};
use crate::error::FlightmarkError;
use crate::features::shell::{completion_install_instructions, generate_completions};

/// Mode and calculator for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracking {
    pub mode: TrackingMode,
    pub calculator: Calculator,
}

/// Resolve tracking options.
///
/// Mode precedence: command line, then `fallback_mode` (e.g. a script's own
/// mode), then the configured default. The ratio comes from the command line
/// or the config.
///
/// # Errors
///
/// Returns `FlightmarkError::InvalidArgument` if the ratio is not a positive
/// number.
pub fn resolve_tracking(
    args: &TrackingArgs,
    config: &Config,
    fallback_mode: Option<TrackingMode>,
) -> Result<Tracking, FlightmarkError> {
    let mode = args
        .mode
        .or(fallback_mode)
        .unwrap_or(config.tracking.default_mode);

    let ratio = args.ratio.unwrap_or(config.tracking.estimate_ratio);
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(FlightmarkError::InvalidArgument(format!(
            "ratio must be a positive number, got {ratio}"
        )));
    }

    Ok(Tracking {
        mode,
        calculator: Calculator::with_ratio(ratio),
    })
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(shell: Shell, install: bool) -> Result<String, FlightmarkError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}
