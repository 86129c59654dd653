//! The session-scoped collection of marked points.
//!
//! The store keeps its points sorted by time after every mutation and
//! applies the insertion policy of the active [`TrackingMode`]. Lookups by an
//! unknown id are silent no-ops, reported only through a `false` return.

use super::duration::{Calculator, DurationSummary};
use super::media::PositionSource;
use super::mode::{Insertion, TrackingMode};
use super::point::{clamp_time, sort_by_time, PointId, TimePoint};

/// Ordered time points for one marking session.
#[derive(Debug, Clone)]
pub struct TimePointStore {
    points: Vec<TimePoint>,
    mode: TrackingMode,
    next_id: u64,
}

impl Default for TimePointStore {
    fn default() -> Self {
        Self::new(TrackingMode::default())
    }
}

impl TimePointStore {
    /// Create an empty store in the given mode.
    #[must_use]
    pub const fn new(mode: TrackingMode) -> Self {
        Self {
            points: Vec::new(),
            mode,
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Record a point at `current_time` labelled with its 1-based sequence
    /// number. Not subject to the simple-mode capacity.
    pub fn record(&mut self, current_time: f64) -> TimePoint {
        let id = self.allocate_id();
        let point = TimePoint::new(id, current_time, format!("{}", self.points.len() + 1));
        log::debug!("record {} at {:.3}s", point.id, point.time);

        self.points.push(point.clone());
        sort_by_time(&mut self.points);
        point
    }

    /// Record a point at the source's current position.
    pub fn record_from(&mut self, source: &dyn PositionSource) -> TimePoint {
        self.record(source.position())
    }

    /// Add a labelled point following the active mode's insertion policy.
    ///
    /// An empty label becomes `"Point <n+1>"`. In simple mode, once both
    /// slots are taken, every point except the earliest is discarded before
    /// the new one goes in.
    pub fn add(&mut self, label: &str, current_time: f64) -> PointId {
        let label = if label.trim().is_empty() {
            format!("Point {}", self.points.len() + 1)
        } else {
            label.to_string()
        };

        match self.mode.insertion(self.points.len()) {
            Insertion::Append => {}
            Insertion::ReplaceLater => {
                // Sorted, so the earliest point sits at index 0.
                let dropped = self.points.len().saturating_sub(1);
                self.points.truncate(1);
                log::debug!("simple mode at capacity, replaced {dropped} later point(s)");
            }
        }

        let id = self.allocate_id();
        self.points.push(TimePoint::new(id, current_time, label));
        sort_by_time(&mut self.points);
        log::debug!("add {id} ({} points, {} mode)", self.points.len(), self.mode);
        id
    }

    /// Add a labelled point at the source's current position.
    pub fn add_from(&mut self, label: &str, source: &dyn PositionSource) -> PointId {
        self.add(label, source.position())
    }

    /// Replace a point's label, and its time when one is given.
    ///
    /// Re-sorts when the time changes. Returns `false` if no point has `id`.
    pub fn update(&mut self, id: PointId, label: &str, time: Option<f64>) -> bool {
        let Some(point) = self.points.iter_mut().find(|p| p.id == id) else {
            log::debug!("update ignored, no point {id}");
            return false;
        };

        point.label = label.to_string();
        if let Some(time) = time {
            point.time = clamp_time(time);
            sort_by_time(&mut self.points);
        }
        log::debug!("update {id}");
        true
    }

    /// Delete a point. Returns `false` if no point has `id`.
    pub fn remove(&mut self, id: PointId) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != id);
        let removed = self.points.len() != before;
        if removed {
            log::debug!("remove {id}");
        } else {
            log::debug!("remove ignored, no point {id}");
        }
        removed
    }

    /// Drop every point. Ids handed out so far stay retired.
    pub fn reset(&mut self) {
        log::debug!("reset ({} points cleared)", self.points.len());
        self.points.clear();
    }

    /// Active tracking mode.
    #[must_use]
    pub const fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// Switch mode. Existing points are kept as they are.
    pub fn set_mode(&mut self, mode: TrackingMode) {
        if self.mode != mode {
            log::debug!("mode {} -> {mode}", self.mode);
        }
        self.mode = mode;
    }

    /// Flip between simple and advanced, returning the new mode.
    pub fn toggle_mode(&mut self) -> TrackingMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Points in ascending time order.
    #[must_use]
    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    /// Look up a point by id.
    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&TimePoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Durations for the current points under the active mode.
    #[must_use]
    pub fn summary(&self, calculator: &Calculator) -> DurationSummary {
        calculator.summarize(&self.points, self.mode)
    }
}
