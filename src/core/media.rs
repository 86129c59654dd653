//! Media-side collaborators.
//!
//! The core never drives playback itself. It reads the playhead through
//! [`PositionSource`] and issues seeks through [`SeekSink`]. [`PlaybackClock`]
//! is a virtual playhead implementing both, used by the interactive marker
//! when no real player is attached.

use std::time::Instant;

use super::point::clamp_time;

/// Frame rate assumed when none is configured.
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Anything that can report the current playback position in seconds.
#[cfg_attr(test, mockall::automock)]
pub trait PositionSource {
    /// Current position, non-negative seconds.
    fn position(&self) -> f64;
}

/// Where to move the playhead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekTarget {
    /// Jump to an absolute position in seconds.
    Absolute(f64),
    /// Move by a signed number of seconds.
    Seconds(f64),
    /// Move by a signed number of frames.
    Frames(i64),
}

/// Anything that accepts seek commands.
pub trait SeekSink {
    /// Move the playhead.
    fn seek(&mut self, target: SeekTarget);
}

/// A virtual playhead that advances with wall-clock time while playing.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Position at the moment playback last started or was seeked.
    anchor: f64,
    /// Set while playing.
    playing_since: Option<Instant>,
    length: Option<f64>,
    frame_rate: f64,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(None, DEFAULT_FRAME_RATE)
    }
}

impl PlaybackClock {
    /// Create a paused clock at zero.
    ///
    /// `length` bounds the playhead when known. A frame rate that is not a
    /// positive number falls back to [`DEFAULT_FRAME_RATE`].
    #[must_use]
    pub fn new(length: Option<f64>, frame_rate: f64) -> Self {
        let frame_rate = if frame_rate.is_finite() && frame_rate > 0.0 {
            frame_rate
        } else {
            DEFAULT_FRAME_RATE
        };
        Self {
            anchor: 0.0,
            playing_since: None,
            length: length.map(clamp_time),
            frame_rate,
        }
    }

    /// Media length in seconds, if bounded.
    #[must_use]
    pub const fn length(&self) -> Option<f64> {
        self.length
    }

    /// Configured frame rate.
    #[must_use]
    pub const fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Approximate duration of one frame in seconds.
    #[must_use]
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.frame_rate
    }

    /// Whether the playhead is advancing. A bounded clock that has run to
    /// its end counts as paused.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing_since.is_some() && !self.is_finished()
    }

    /// Whether a bounded clock has reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.length.is_some_and(|len| self.position() >= len)
    }

    /// Start advancing. Restarts from zero if already at the end.
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        if self.is_finished() {
            self.anchor = 0.0;
        }
        self.playing_since = Some(Instant::now());
    }

    /// Freeze the playhead where it is.
    pub fn pause(&mut self) {
        if self.playing_since.is_some() {
            self.anchor = self.position();
            self.playing_since = None;
        }
    }

    /// Play if paused, pause if playing.
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    fn bound(&self, position: f64) -> f64 {
        let position = clamp_time(position);
        self.length.map_or(position, |len| position.min(len))
    }

    fn set_position(&mut self, position: f64) {
        let resume = self.is_playing();
        self.anchor = self.bound(position);
        self.playing_since = resume.then(Instant::now);
    }
}

impl PositionSource for PlaybackClock {
    fn position(&self) -> f64 {
        let elapsed = self
            .playing_since
            .map_or(0.0, |since| since.elapsed().as_secs_f64());
        self.bound(self.anchor + elapsed)
    }
}

impl SeekSink for PlaybackClock {
    #[allow(clippy::cast_precision_loss)]
    fn seek(&mut self, target: SeekTarget) {
        let current = self.position();
        let next = match target {
            SeekTarget::Absolute(secs) => secs,
            SeekTarget::Seconds(delta) => current + delta,
            SeekTarget::Frames(frames) => current + frames as f64 * self.frame_duration(),
        };
        self.set_position(next);
        log::trace!("seek {target:?} -> {:.3}s", self.anchor);
    }
}
