//! Output formatting for flightmark.
//!
//! This module provides formatters for displaying marked points and their
//! durations in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::{DurationSummary, TimePoint};
use crate::error::FlightmarkError;

pub use json::*;
pub use pretty::*;

/// Format points and durations based on output format
///
/// # Errors
///
/// Returns `FlightmarkError::Json` if JSON serialization fails.
pub fn format_report(
    points: &[TimePoint],
    summary: &DurationSummary,
    format: OutputFormat,
) -> Result<String, FlightmarkError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(points, summary)),
        OutputFormat::Json => format_report_json(points, summary),
    }
}
