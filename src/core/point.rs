//! Marked time points.

use serde::{Deserialize, Serialize};

/// Stable identifier of a time point.
///
/// Ids are handed out by a [`TimePointStore`](super::TimePointStore) from a
/// counter that only moves forward, so an id is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One labelled instant on the media timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Unique id within the owning store.
    pub id: PointId,
    /// Position in seconds, never negative.
    pub time: f64,
    /// Free-text label.
    pub label: String,
}

impl TimePoint {
    /// Create a point, clamping the time into the valid range.
    #[must_use]
    pub fn new(id: PointId, time: f64, label: impl Into<String>) -> Self {
        Self {
            id,
            time: clamp_time(time),
            label: label.into(),
        }
    }
}

/// Clamp a raw position to a non-negative finite number of seconds.
///
/// Negative and non-finite values collapse to zero.
#[must_use]
pub fn clamp_time(time: f64) -> f64 {
    if time.is_finite() && time > 0.0 {
        time
    } else {
        0.0
    }
}

/// Stable ascending sort by time; ties keep their relative order.
pub fn sort_by_time(points: &mut [TimePoint]) {
    points.sort_by(|a, b| a.time.total_cmp(&b.time));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_time() {
        assert_eq!(clamp_time(1.25), 1.25);
        assert_eq!(clamp_time(0.0), 0.0);
        assert_eq!(clamp_time(-3.0), 0.0);
        assert_eq!(clamp_time(f64::NAN), 0.0);
        assert_eq!(clamp_time(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut points = vec![
            TimePoint::new(PointId(1), 2.0, "a"),
            TimePoint::new(PointId(2), 1.0, "b"),
            TimePoint::new(PointId(3), 2.0, "c"),
            TimePoint::new(PointId(4), 1.0, "d"),
        ];
        sort_by_time(&mut points);

        let ids: Vec<u64> = points.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_point_id_is_a_bare_number() {
        let id: PointId = serde_json::from_str("12").unwrap();
        assert_eq!(id, PointId(12));
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        assert!(serde_json::from_str::<PointId>("\"#12\"").is_err());
        assert_eq!(id.to_string(), "12");
    }

    #[test]
    fn test_serialize_point() {
        let point = TimePoint::new(PointId(3), 1.5, "Takeoff");
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["time"], 1.5);
        assert_eq!(json["label"], "Takeoff");
    }
}
