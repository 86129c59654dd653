//! JSON output formatting for flightmark.

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::core::{DurationSummary, TimePoint};
use crate::error::FlightmarkError;

/// Build the JSON document for points and their durations.
#[must_use]
pub fn report_value(points: &[TimePoint], summary: &DurationSummary) -> Value {
    json!({
        "mode": summary.mode,
        "count": points.len(),
        "points": points,
        "pairs": summary.pairs,
        "total": summary.total,
        "estimated": summary.estimated,
        "generated_at": Utc::now().to_rfc3339(),
    })
}

/// Format points and their durations as JSON
///
/// # Errors
///
/// Returns `FlightmarkError::Json` if JSON serialization fails.
pub fn format_report_json(
    points: &[TimePoint],
    summary: &DurationSummary,
) -> Result<String, FlightmarkError> {
    Ok(serde_json::to_string_pretty(&report_value(points, summary))?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FlightmarkError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FlightmarkError> {
    Ok(serde_json::to_string_pretty(value)?)
}
