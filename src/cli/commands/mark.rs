//! Mark command implementation.

use crate::cli::args::{OutputFormat, TrackingArgs};
use crate::cli::commands::resolve_tracking;
use crate::config::Config;
use crate::core::{parse_timestamp, PlaybackClock, TimePointStore};
use crate::error::FlightmarkError;
use crate::output::format_report;
use crate::tui;

/// Playback settings for one marker session.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Timeline {
    length: Option<f64>,
    frame_rate: f64,
}

fn resolve_timeline(
    length: Option<&str>,
    fps: Option<f64>,
    config: &Config,
) -> Result<Timeline, FlightmarkError> {
    let length = length
        .map(|text| {
            parse_timestamp(text)
                .ok_or_else(|| FlightmarkError::Parse(format!("invalid length '{text}'")))
        })
        .transpose()?;

    let frame_rate = fps.unwrap_or(config.playback.frame_rate);
    if !(frame_rate.is_finite() && frame_rate > 0.0) {
        return Err(FlightmarkError::InvalidArgument(format!(
            "fps must be a positive number, got {frame_rate}"
        )));
    }

    Ok(Timeline { length, frame_rate })
}

/// Open the interactive marker and report the points left on exit.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the terminal cannot be
/// driven, or output formatting fails.
pub fn mark(
    length: Option<&str>,
    fps: Option<f64>,
    tracking: &TrackingArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, FlightmarkError> {
    let tracking = resolve_tracking(tracking, config, None)?;
    let timeline = resolve_timeline(length, fps, config)?;

    log::debug!(
        "opening marker: mode={}, length={:?}, fps={}",
        tracking.mode,
        timeline.length,
        timeline.frame_rate
    );

    let store = tui::run(
        TimePointStore::new(tracking.mode),
        PlaybackClock::new(timeline.length, timeline.frame_rate),
        tracking.calculator,
        config.playback.seek_step_seconds,
    )?;

    let summary = store.summary(&tracking.calculator);
    format_report(store.points(), &summary, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_defaults_from_config() {
        let timeline = resolve_timeline(None, None, &Config::default()).unwrap();
        assert!(timeline.length.is_none());
        assert!((timeline.frame_rate - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timeline_parses_length() {
        let timeline = resolve_timeline(Some("1:30"), Some(24.0), &Config::default()).unwrap();
        assert_eq!(timeline.length, Some(90.0));
        assert!((timeline.frame_rate - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timeline_rejects_bad_input() {
        let config = Config::default();
        assert!(matches!(
            resolve_timeline(Some("forever"), None, &config),
            Err(FlightmarkError::Parse(_))
        ));
        assert!(matches!(
            resolve_timeline(None, Some(0.0), &config),
            Err(FlightmarkError::InvalidArgument(_))
        ));
    }
}
