use colored::Colorize;

use crate::core::{format_seconds, format_timestamp, DurationSummary, TimePoint, TrackingMode};

const RULE_WIDTH: usize = 44;

/// Format points and their durations as a pretty table
pub fn format_report_pretty(points: &[TimePoint], summary: &DurationSummary) -> String {
    let title = format!("{} mode", summary.mode);

    if points.is_empty() {
        return format!("{} (0 points)\n  No points marked", title.bold());
    }

    let mut output = format!("{} ({} points)\n", title.bold(), points.len());
    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');

    for point in points {
        output.push_str(&format!(
            "  {}  {}  {}\n",
            format!("#{:<4}", point.id.0).dimmed(),
            format_timestamp(point.time).yellow(),
            point.label
        ));
    }

    if summary.mode == TrackingMode::Advanced {
        output.push_str(&"─".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!("{}\n", "Pairs".bold()));

        if summary.pairs.is_empty() {
            output.push_str(&format!("  {}\n", "Mark two points to form a pair".dimmed()));
        }

        for (i, pair) in summary.pairs.iter().enumerate() {
            output.push_str(&format!(
                "  {:>3}  {} → {}  {}\n",
                i + 1,
                format_timestamp(pair.start),
                format_timestamp(pair.end),
                format_seconds(pair.duration).cyan()
            ));
        }

        if points.len() % 2 == 1 {
            output.push_str(&format!(
                "  {}\n",
                "Last point is unpaired and not counted".dimmed()
            ));
        }
    }

    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{}  {}\n",
        "Total:    ".bold(),
        format_seconds(summary.total).green().bold()
    ));

    if let Some(estimated) = summary.estimated {
        output.push_str(&format!(
            "{}  {}\n",
            "Estimated:".bold(),
            format_seconds(estimated).green()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Calculator, TimePointStore};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_pretty_empty() {
        plain();
        let store = TimePointStore::new(TrackingMode::Simple);
        let output = format_report_pretty(store.points(), &store.summary(&Calculator::default()));
        assert!(output.contains("Simple mode (0 points)"));
        assert!(output.contains("No points marked"));
    }

    #[test]
    fn test_pretty_simple_shows_estimate() {
        plain();
        let mut store = TimePointStore::new(TrackingMode::Simple);
        store.add("Takeoff", 0.0);
        store.add("Landing", 9.0);

        let output = format_report_pretty(store.points(), &store.summary(&Calculator::default()));
        assert!(output.contains("00:00.000"));
        assert!(output.contains("00:09.000"));
        assert!(output.contains("Takeoff"));
        assert!(output.contains("9.000s"));
        assert!(output.contains("Estimated:"));
        assert!(output.contains("7.020s"));
        assert!(!output.contains("Pairs"));
    }

    #[test]
    fn test_pretty_advanced_lists_pairs() {
        plain();
        let mut store = TimePointStore::new(TrackingMode::Advanced);
        for t in [0.0, 2.0, 5.0] {
            store.record(t);
        }

        let output = format_report_pretty(store.points(), &store.summary(&Calculator::default()));
        assert!(output.contains("Pairs"));
        assert!(output.contains("00:00.000 → 00:02.000"));
        assert!(output.contains("unpaired"));
        assert!(output.contains("2.000s"));
        assert!(!output.contains("Estimated:"));
    }
}
