//! Replay command implementation.

use std::io::Read;
use std::path::Path;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, TrackingArgs};
use crate::cli::commands::resolve_tracking;
use crate::config::Config;
use crate::core::TimePointStore;
use crate::error::FlightmarkError;
use crate::features::replay::{replay as apply_ops, ReplayScript};
use crate::output::{format_report_pretty, report_value, to_json};

fn read_script(path: &Path) -> Result<String, FlightmarkError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        FlightmarkError::Parse(format!("Failed to read script {}: {e}", path.display()))
    })
}

/// Apply a replay script to a fresh store and report the result.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, an operation has
/// an invalid time, or output formatting fails.
pub fn replay(
    file: &Path,
    tracking: &TrackingArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, FlightmarkError> {
    let script = ReplayScript::from_yaml(&read_script(file)?)?;
    let tracking = resolve_tracking(tracking, config, script.mode)?;

    let mut store = TimePointStore::new(tracking.mode);
    let outcome = apply_ops(&mut store, &script.ops)?;
    let summary = store.summary(&tracking.calculator);

    match format {
        OutputFormat::Json => {
            let mut value = report_value(store.points(), &summary);
            value["replay"] = json!(outcome);
            to_json(&value)
        }
        OutputFormat::Pretty => {
            let mut output = format_report_pretty(store.points(), &summary);
            output.push_str(
                &format!(
                    "Applied {} operations ({} skipped)",
                    outcome.applied, outcome.skipped
                )
                .dimmed()
                .to_string(),
            );
            Ok(output)
        }
    }
}
