//! Application state for the interactive marker.

use crate::core::{
    format_timestamp, Calculator, DurationSummary, PlaybackClock, PointId, PositionSource,
    SeekSink, SeekTarget, TimePoint, TimePointStore, TrackingMode,
};

/// What a pending text prompt will do when submitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptKind {
    /// Add a point at the captured time.
    AddLabel { time: f64 },
    /// Relabel an existing point.
    EditLabel { id: PointId },
}

/// A line of text being typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

/// Application state.
pub struct App {
    /// Marked points for this session.
    pub store: TimePointStore,
    /// Virtual playhead.
    pub clock: PlaybackClock,
    /// Duration calculator.
    pub calculator: Calculator,
    /// Seconds moved per seek key press.
    pub seek_step: f64,
    /// Currently selected index into the sorted points.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Text prompt in progress.
    pub prompt: Option<Prompt>,
    /// Waiting for y/n before clearing all points.
    pub confirm_reset: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(
        store: TimePointStore,
        clock: PlaybackClock,
        calculator: Calculator,
        seek_step: f64,
    ) -> Self {
        Self {
            store,
            clock,
            calculator,
            seek_step,
            selected: 0,
            status: Some("Press space to mark, ? for help".to_string()),
            prompt: None,
            confirm_reset: false,
            should_quit: false,
        }
    }

    /// Current durations, recomputed from the store.
    #[must_use]
    pub fn summary(&self) -> DurationSummary {
        self.store.summary(&self.calculator)
    }

    /// Get the currently selected point.
    #[must_use]
    pub fn selected_point(&self) -> Option<&TimePoint> {
        self.store.points().get(self.selected)
    }

    fn select_id(&mut self, id: PointId) {
        if let Some(index) = self.store.points().iter().position(|p| p.id == id) {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.store.is_empty() && self.selected < self.store.len() - 1 {
            self.selected += 1;
        }
    }

    /// Record a point at the playhead.
    pub fn mark(&mut self) {
        let point = self.store.record_from(&self.clock);
        self.select_id(point.id);
        self.status = Some(format!(
            "Marked {} at {}",
            point.label,
            format_timestamp(point.time)
        ));
    }

    /// Capture the playhead and ask for a label.
    pub fn begin_add(&mut self) {
        self.prompt = Some(Prompt {
            kind: PromptKind::AddLabel {
                time: self.clock.position(),
            },
            buffer: String::new(),
        });
    }

    /// Ask for a new label for the selected point.
    pub fn begin_edit(&mut self) {
        if let Some(point) = self.selected_point() {
            self.prompt = Some(Prompt {
                kind: PromptKind::EditLabel { id: point.id },
                buffer: point.label.clone(),
            });
        }
    }

    /// Append a character to the prompt.
    pub fn prompt_push(&mut self, c: char) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.buffer.push(c);
        }
    }

    /// Delete the last character of the prompt.
    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.buffer.pop();
        }
    }

    /// Abandon the prompt.
    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
        self.status = None;
    }

    /// Apply the prompt.
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };

        match prompt.kind {
            PromptKind::AddLabel { time } => {
                let id = self.store.add(prompt.buffer.trim(), time);
                self.select_id(id);
                let label = self.store.get(id).map_or_else(String::new, |p| p.label.clone());
                self.status = Some(format!("Added {label} at {}", format_timestamp(time)));
            }
            PromptKind::EditLabel { id } => {
                if self.store.update(id, prompt.buffer.trim(), None) {
                    self.status = Some(format!("Renamed point #{id}"));
                } else {
                    self.status = Some(format!("Point #{id} no longer exists"));
                }
            }
        }
        self.clamp_selection();
    }

    /// Move the selected point to the playhead, keeping its label.
    pub fn retime_selected(&mut self) {
        if let Some(point) = self.selected_point() {
            let id = point.id;
            let label = point.label.clone();
            let time = self.clock.position();
            self.store.update(id, &label, Some(time));
            self.select_id(id);
            self.status = Some(format!("Moved {label} to {}", format_timestamp(time)));
        }
    }

    /// Delete the selected point.
    pub fn remove_selected(&mut self) {
        if let Some(point) = self.selected_point() {
            let id = point.id;
            let label = point.label.clone();
            self.store.remove(id);
            self.clamp_selection();
            self.status = Some(format!("Removed {label}"));
        }
    }

    /// Ask before clearing every point.
    pub fn request_reset(&mut self) {
        if self.store.is_empty() {
            self.status = Some("Nothing to clear".to_string());
            return;
        }
        self.confirm_reset = true;
        self.status = Some(format!("Clear all {} points? (y/n)", self.store.len()));
    }

    /// Answer the reset question.
    pub fn answer_reset(&mut self, confirmed: bool) {
        if !self.confirm_reset {
            return;
        }
        self.confirm_reset = false;
        if confirmed {
            self.store.reset();
            self.selected = 0;
            self.status = Some("Cleared all points".to_string());
        } else {
            self.status = Some("Kept all points".to_string());
        }
    }

    /// Switch between simple and advanced tracking.
    pub fn toggle_mode(&mut self) {
        let mode = self.store.toggle_mode();
        let note = match (mode, mode.capacity()) {
            (TrackingMode::Simple, Some(cap)) if self.store.len() > cap => {
                format!(" ({} points kept; the next add replaces all but the first)", self.store.len())
            }
            _ => String::new(),
        };
        self.status = Some(format!("{mode} mode{note}"));
    }

    /// Play or pause the playhead.
    pub fn toggle_playback(&mut self) {
        self.clock.toggle();
        self.status = Some(if self.clock.is_playing() {
            "Playing".to_string()
        } else {
            format!("Paused at {}", format_timestamp(self.clock.position()))
        });
    }

    /// Seek by whole seek steps; negative goes back.
    pub fn seek_steps(&mut self, steps: f64) {
        self.clock.seek(SeekTarget::Seconds(steps * self.seek_step));
        self.status = None;
    }

    /// Step by frames; negative goes back.
    pub fn step_frames(&mut self, frames: i64) {
        self.clock.seek(SeekTarget::Frames(frames));
        self.status = None;
    }

    /// Jump to the start of the timeline.
    pub fn seek_start(&mut self) {
        self.clock.seek(SeekTarget::Absolute(0.0));
        self.status = None;
    }

    /// Jump the playhead to the selected point.
    pub fn seek_to_selected(&mut self) {
        if let Some(point) = self.selected_point() {
            let time = point.time;
            self.clock.seek(SeekTarget::Absolute(time));
            self.status = Some(format!("Jumped to {}", format_timestamp(time)));
        }
    }
}
