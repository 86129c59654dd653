//! Replay script format.
//!
//! A script names an optional starting mode and a list of store operations:
//!
//! ```yaml
//! mode: advanced
//! ops:
//!   - op: record
//!     time: 1.5
//!   - op: add
//!     label: Landing
//!     time: "0:04.250"
//!   - op: update
//!     id: 1
//!     label: Takeoff
//!   - op: toggle
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{parse_timestamp, PointId, TimePointStore, TrackingMode};
use crate::error::FlightmarkError;

/// A time written either as a number of seconds or as a timestamp string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    /// Plain seconds.
    Seconds(f64),
    /// Any form accepted by [`parse_timestamp`].
    Text(String),
}

impl TimeValue {
    /// Resolve to seconds.
    ///
    /// # Errors
    ///
    /// Returns `FlightmarkError::Parse` for malformed or negative times.
    pub fn seconds(&self) -> Result<f64, FlightmarkError> {
        match self {
            Self::Seconds(secs) if secs.is_finite() && *secs >= 0.0 => Ok(*secs),
            Self::Seconds(secs) => Err(FlightmarkError::Parse(format!(
                "time must be a non-negative number of seconds, got {secs}"
            ))),
            Self::Text(text) => parse_timestamp(text)
                .ok_or_else(|| FlightmarkError::Parse(format!("invalid timestamp '{text}'"))),
        }
    }
}

/// One store operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Record with a positional label.
    Record { time: TimeValue },
    /// Add with a caller label, following the mode's insertion policy.
    Add {
        #[serde(default)]
        label: String,
        time: TimeValue,
    },
    /// Relabel, and retime when `time` is present.
    Update {
        id: PointId,
        label: String,
        #[serde(default)]
        time: Option<TimeValue>,
    },
    /// Delete one point.
    Remove { id: PointId },
    /// Delete every point.
    Reset,
    /// Switch to a specific mode.
    Mode { mode: TrackingMode },
    /// Flip the mode.
    Toggle,
}

impl Operation {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Record { .. } => "record",
            Self::Add { .. } => "add",
            Self::Update { .. } => "update",
            Self::Remove { .. } => "remove",
            Self::Reset => "reset",
            Self::Mode { .. } => "mode",
            Self::Toggle => "toggle",
        }
    }

    /// Apply to a store.
    ///
    /// Returns `false` when the operation named an unknown id and was
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `FlightmarkError::Parse` if a time cannot be resolved; the
    /// store is left untouched in that case.
    pub fn apply(&self, store: &mut TimePointStore) -> Result<bool, FlightmarkError> {
        match self {
            Self::Record { time } => {
                store.record(time.seconds()?);
                Ok(true)
            }
            Self::Add { label, time } => {
                store.add(label, time.seconds()?);
                Ok(true)
            }
            Self::Update { id, label, time } => {
                let time = time.as_ref().map(TimeValue::seconds).transpose()?;
                Ok(store.update(*id, label, time))
            }
            Self::Remove { id } => Ok(store.remove(*id)),
            Self::Reset => {
                store.reset();
                Ok(true)
            }
            Self::Mode { mode } => {
                store.set_mode(*mode);
                Ok(true)
            }
            Self::Toggle => {
                store.toggle_mode();
                Ok(true)
            }
        }
    }
}

/// A parsed replay script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Mode to start in; the configured default when absent.
    #[serde(default)]
    pub mode: Option<TrackingMode>,
    /// Operations in application order.
    #[serde(default)]
    pub ops: Vec<Operation>,
}

impl ReplayScript {
    /// Parse a script from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `FlightmarkError::Parse` if the YAML does not describe a script.
    pub fn from_yaml(text: &str) -> Result<Self, FlightmarkError> {
        serde_yaml::from_str(text)
            .map_err(|e| FlightmarkError::Parse(format!("invalid replay script: {e}")))
    }
}
