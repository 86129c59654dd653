//! Duration metrics derived from a snapshot of time points.
//!
//! All functions here are pure: they copy and re-sort the snapshot before
//! reducing it, so the result does not depend on the caller's ordering.

use serde::Serialize;

use super::mode::{TotalRule, TrackingMode};
use super::point::{sort_by_time, PointId, TimePoint};

/// Ratio between the bracketed span and the event it brackets, applied in
/// simple mode.
pub const DEFAULT_ESTIMATE_RATIO: f64 = 0.78;

/// Two consecutive points reduced to one elapsed time.
///
/// The ids are lookups only; recompute pairs after any mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationPair {
    /// Earlier point.
    pub start_id: PointId,
    /// Later point.
    pub end_id: PointId,
    /// Time of the earlier point in seconds.
    pub start: f64,
    /// Time of the later point in seconds.
    pub end: f64,
    /// `end - start`.
    pub duration: f64,
}

fn sorted_snapshot(points: &[TimePoint]) -> Vec<TimePoint> {
    let mut snapshot = points.to_vec();
    sort_by_time(&mut snapshot);
    snapshot
}

/// Pair points `(0,1), (2,3), ...` in time order.
///
/// A trailing unpaired point is left out.
#[must_use]
pub fn pair_durations(points: &[TimePoint]) -> Vec<DurationPair> {
    sorted_snapshot(points)
        .chunks_exact(2)
        .map(|pair| DurationPair {
            start_id: pair[0].id,
            end_id: pair[1].id,
            start: pair[0].time,
            end: pair[1].time,
            duration: pair[1].time - pair[0].time,
        })
        .collect()
}

/// Total elapsed time for the given mode.
///
/// Simple mode spans first to last point; advanced mode sums the pairs.
/// Fewer than two points yields zero in both.
#[must_use]
pub fn total_duration(points: &[TimePoint], mode: TrackingMode) -> f64 {
    match mode.total_rule() {
        TotalRule::Span => {
            let snapshot = sorted_snapshot(points);
            match (snapshot.first(), snapshot.last()) {
                (Some(first), Some(last)) if snapshot.len() >= 2 => last.time - first.time,
                _ => 0.0,
            }
        }
        TotalRule::SumOfPairs => pair_durations(points).iter().map(|p| p.duration).sum(),
    }
}

/// Calibrated estimate of the event duration, simple mode only.
#[must_use]
pub fn estimated_duration(total: f64, mode: TrackingMode, ratio: f64) -> Option<f64> {
    mode.has_estimate().then(|| total * ratio)
}

/// Everything the presentation layer shows about a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationSummary {
    /// Mode the summary was computed under.
    pub mode: TrackingMode,
    /// Number of points in the snapshot.
    pub point_count: usize,
    /// Consecutive pairs in time order.
    pub pairs: Vec<DurationPair>,
    /// Mode-dependent total in seconds.
    pub total: f64,
    /// Simple-mode estimate, `None` in advanced mode.
    pub estimated: Option<f64>,
}

/// Holds the calibration ratio and produces summaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator {
    /// Multiplier applied to the simple-mode total.
    pub estimate_ratio: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            estimate_ratio: DEFAULT_ESTIMATE_RATIO,
        }
    }
}

impl Calculator {
    /// Create a calculator with a custom ratio.
    #[must_use]
    pub const fn with_ratio(estimate_ratio: f64) -> Self {
        Self { estimate_ratio }
    }

    /// Reduce a snapshot into pairs, total, and estimate.
    #[must_use]
    pub fn summarize(&self, points: &[TimePoint], mode: TrackingMode) -> DurationSummary {
        let total = total_duration(points, mode);
        DurationSummary {
            mode,
            point_count: points.len(),
            pairs: pair_durations(points),
            total,
            estimated: estimated_duration(total, mode, self.estimate_ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn points(times: &[f64]) -> Vec<TimePoint> {
        times
            .iter()
            .enumerate()
            .map(|(i, &t)| TimePoint::new(PointId(i as u64 + 1), t, format!("{}", i + 1)))
            .collect()
    }

    #[test]
    fn test_pairs_ignore_insertion_order() {
        let shuffled = points(&[9.0, 3.0, 5.0, 1.0]);
        let pairs = pair_durations(&shuffled);

        assert_eq!(pairs.len(), 2);
        assert_eq!((pairs[0].start, pairs[0].end), (1.0, 3.0));
        assert!((pairs[0].duration - 2.0).abs() < EPSILON);
        assert_eq!((pairs[1].start, pairs[1].end), (5.0, 9.0));
        assert!((pairs[1].duration - 4.0).abs() < EPSILON);
        assert_eq!(pairs[0].start_id, PointId(4));
        assert_eq!(pairs[0].end_id, PointId(2));
    }

    #[test]
    fn test_odd_count_drops_trailing_point() {
        let pairs = pair_durations(&points(&[0.0, 2.0, 5.0]));
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].start, pairs[0].end), (0.0, 2.0));
        assert!((pairs[0].duration - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_pairs_empty_and_single() {
        assert!(pair_durations(&[]).is_empty());
        assert!(pair_durations(&points(&[4.0])).is_empty());
    }

    #[test]
    fn test_advanced_total_sums_pairs() {
        let total = total_duration(&points(&[0.0, 2.0, 5.0, 9.0]), TrackingMode::Advanced);
        assert!((total - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_advanced_total_without_pairs() {
        assert_eq!(total_duration(&[], TrackingMode::Advanced), 0.0);
        assert_eq!(total_duration(&points(&[3.0]), TrackingMode::Advanced), 0.0);
    }

    #[test]
    fn test_simple_total_spans_extremes() {
        let total = total_duration(&points(&[9.0, 0.0]), TrackingMode::Simple);
        assert!((total - 9.0).abs() < EPSILON);

        // Pairing is ignored in simple mode.
        let total = total_duration(&points(&[0.0, 2.0, 5.0, 9.0]), TrackingMode::Simple);
        assert!((total - 9.0).abs() < EPSILON);
    }

    #[test]
    fn test_simple_total_degenerate() {
        assert_eq!(total_duration(&[], TrackingMode::Simple), 0.0);
        assert_eq!(total_duration(&points(&[7.5]), TrackingMode::Simple), 0.0);
    }

    #[test]
    fn test_estimated_duration() {
        let estimate = estimated_duration(9.0, TrackingMode::Simple, DEFAULT_ESTIMATE_RATIO);
        assert!((estimate.unwrap() - 7.02).abs() < EPSILON);
        assert!(estimated_duration(9.0, TrackingMode::Advanced, DEFAULT_ESTIMATE_RATIO).is_none());
    }

    #[test]
    fn test_calculator_custom_ratio() {
        let calc = Calculator::with_ratio(0.5);
        let summary = calc.summarize(&points(&[1.0, 5.0]), TrackingMode::Simple);
        assert!((summary.total - 4.0).abs() < EPSILON);
        assert!((summary.estimated.unwrap() - 2.0).abs() < EPSILON);
        assert_eq!(summary.point_count, 2);
        assert_eq!(summary.pairs.len(), 1);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let calc = Calculator::default();
        let snapshot = points(&[0.1, 0.7, 1.3, 2.9, 3.3]);
        let first = calc.summarize(&snapshot, TrackingMode::Advanced);
        let second = calc.summarize(&snapshot, TrackingMode::Advanced);
        assert_eq!(first, second);
        assert!(first.estimated.is_none());
    }
}
