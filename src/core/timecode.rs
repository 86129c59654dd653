//! Timestamp parsing and formatting.
//!
//! Accepted input forms:
//! - plain seconds: `12`, `12.5`
//! - clock form: `1:02`, `01:02.250`, `1:02:03.5`
//! - unit form: `90s`, `1m2.5s`, `1h2m`

use once_cell::sync::Lazy;
use regex::Regex;

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+):)?(\d{1,2}):(\d{1,2}(?:\.\d+)?)$")
        .unwrap_or_else(|e| panic!("Invalid clock regex: {e}"))
});

static UNIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+(?:\.\d+)?)h)?(?:(\d+(?:\.\d+)?)m)?(?:(\d+(?:\.\d+)?)s)?$")
        .unwrap_or_else(|e| panic!("Invalid unit regex: {e}"))
});

/// Parse a timestamp into seconds.
///
/// Returns `None` for empty, negative, or malformed input.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<f64> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    if let Ok(secs) = s.parse::<f64>() {
        return (secs.is_finite() && secs >= 0.0).then_some(secs);
    }

    if let Some(caps) = CLOCK_PATTERN.captures(&s) {
        let hours = caps.get(1).map_or(Ok(0.0), |m| m.as_str().parse::<f64>()).ok()?;
        let minutes: f64 = caps[2].parse().ok()?;
        let seconds: f64 = caps[3].parse().ok()?;
        // With an hours field the minutes are bounded too.
        if seconds >= 60.0 || (caps.get(1).is_some() && minutes >= 60.0) {
            return None;
        }
        return Some(hours * 3600.0 + minutes * 60.0 + seconds);
    }

    if let Some(caps) = UNIT_PATTERN.captures(&s) {
        let field = |i: usize| -> Option<f64> {
            caps.get(i).map_or(Some(0.0), |m| m.as_str().parse::<f64>().ok())
        };
        if (1..=3).all(|i| caps.get(i).is_none()) {
            return None;
        }
        return Some(field(1)? * 3600.0 + field(2)? * 60.0 + field(3)?);
    }

    None
}

/// Format seconds as `MM:SS.mmm`, or `H:MM:SS.mmm` from one hour up.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_timestamp(secs: f64) -> String {
    let total_millis = (secs.max(0.0) * 1000.0).round() as u64;
    let millis = total_millis % 1000;
    let total_seconds = total_millis / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}.{millis:03}")
    } else {
        format!("{minutes:02}:{seconds:02}.{millis:03}")
    }
}

/// Format an elapsed duration in seconds with millisecond precision.
#[must_use]
pub fn format_seconds(secs: f64) -> String {
    format!("{secs:.3}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_seconds() {
        assert_eq!(parse_timestamp("12"), Some(12.0));
        assert_eq!(parse_timestamp(" 12.5 "), Some(12.5));
        assert_eq!(parse_timestamp("0"), Some(0.0));
    }

    #[test]
    fn test_parse_clock_form() {
        assert_eq!(parse_timestamp("1:02"), Some(62.0));
        assert_eq!(parse_timestamp("01:02.250"), Some(62.25));
        assert_eq!(parse_timestamp("1:02:03.5"), Some(3723.5));
        assert_eq!(parse_timestamp("90:00"), Some(5400.0));
    }

    #[test]
    fn test_parse_unit_form() {
        assert_eq!(parse_timestamp("90s"), Some(90.0));
        assert_eq!(parse_timestamp("1m2.5s"), Some(62.5));
        assert_eq!(parse_timestamp("1h2m"), Some(3720.0));
        assert_eq!(parse_timestamp("2M"), Some(120.0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("abc").is_none());
        assert!(parse_timestamp("-3").is_none());
        assert!(parse_timestamp("1:75").is_none());
        assert!(parse_timestamp("1:60:00").is_none());
        assert!(parse_timestamp("1x").is_none());
        assert!(parse_timestamp("inf").is_none());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00.000");
        assert_eq!(format_timestamp(62.25), "01:02.250");
        assert_eq!(format_timestamp(3723.5), "1:02:03.500");
        assert_eq!(format_timestamp(-1.0), "00:00.000");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(7.02), "7.020s");
        assert_eq!(format_seconds(0.0), "0.000s");
    }
}
