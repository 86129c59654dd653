//! Time-point core.
//!
//! The data model and duration logic: marked points, the session store that
//! orders and edits them, and the pure calculator that reduces a snapshot into
//! pairs and totals. Playback is reached only through the traits in [`media`].

mod duration;
pub mod media;
mod mode;
mod point;
mod store;
pub mod timecode;

pub use duration::{
    estimated_duration, pair_durations, total_duration, Calculator, DurationPair,
    DurationSummary, DEFAULT_ESTIMATE_RATIO,
};
pub use media::{PlaybackClock, PositionSource, SeekSink, SeekTarget, DEFAULT_FRAME_RATE};
pub use mode::{Insertion, TotalRule, TrackingMode};
pub use point::{clamp_time, sort_by_time, PointId, TimePoint};
pub use store::TimePointStore;
pub use timecode::{format_seconds, format_timestamp, parse_timestamp};
