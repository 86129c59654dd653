//! Calc command implementation.

use crate::cli::args::{OutputFormat, TrackingArgs};
use crate::cli::commands::resolve_tracking;
use crate::config::Config;
use crate::core::{parse_timestamp, TimePointStore};
use crate::error::FlightmarkError;
use crate::output::format_report;

/// Record every timestamp into a fresh store and report durations.
///
/// # Errors
///
/// Returns an error if a timestamp cannot be parsed, the ratio is invalid,
/// or output formatting fails.
pub fn calc(
    times: &[String],
    tracking: &TrackingArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, FlightmarkError> {
    let tracking = resolve_tracking(tracking, config, None)?;

    let seconds = times
        .iter()
        .map(|t| {
            parse_timestamp(t)
                .ok_or_else(|| FlightmarkError::Parse(format!("invalid timestamp '{t}'")))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let mut store = TimePointStore::new(tracking.mode);
    for secs in seconds {
        store.record(secs);
    }

    let summary = store.summary(&tracking.calculator);
    format_report(store.points(), &summary, format)
}
