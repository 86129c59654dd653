//! Scripted replay of store operations.
//!
//! Lets a recorded or hand-written list of marking operations run against a
//! fresh store without the interactive marker.

mod script;

pub use script::{Operation, ReplayScript, TimeValue};

use serde::Serialize;

use crate::core::TimePointStore;
use crate::error::FlightmarkError;

/// Counts from one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    /// Operations that changed or confirmed store state.
    pub applied: usize,
    /// Updates and removals that named an unknown id.
    pub skipped: usize,
}

/// Apply every operation in order.
///
/// # Errors
///
/// Returns `FlightmarkError::Parse` naming the 1-based position of the first
/// operation whose time cannot be resolved. Earlier operations stay applied.
pub fn replay(
    store: &mut TimePointStore,
    ops: &[Operation],
) -> Result<ReplayOutcome, FlightmarkError> {
    let mut outcome = ReplayOutcome::default();

    for (i, op) in ops.iter().enumerate() {
        let applied = op.apply(store).map_err(|e| match e {
            FlightmarkError::Parse(msg) => {
                FlightmarkError::Parse(format!("op {} ({}): {msg}", i + 1, op.name()))
            }
            other => other,
        })?;

        if applied {
            outcome.applied += 1;
        } else {
            log::debug!("op {} ({}) skipped", i + 1, op.name());
            outcome.skipped += 1;
        }
    }

    log::info!(
        "replayed {} ops ({} skipped), {} points remain",
        ops.len(),
        outcome.skipped,
        store.len()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Calculator, PointId, TrackingMode};

    #[test]
    fn test_replay_simple_overwrite() {
        let script = ReplayScript::from_yaml(
            r"
ops:
  - op: add
    label: start
    time: 1
  - op: add
    label: end
    time: 3
  - op: add
    label: new end
    time: 5
",
        )
        .unwrap();

        let mut store = TimePointStore::new(TrackingMode::Simple);
        let outcome = replay(&mut store, &script.ops).unwrap();

        assert_eq!(outcome, ReplayOutcome { applied: 3, skipped: 0 });
        let labels: Vec<&str> = store.points().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["start", "new end"]);
        assert!((store.summary(&Calculator::default()).total - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_replay_counts_skips() {
        let ops = vec![
            Operation::Record {
                time: TimeValue::Seconds(1.0),
            },
            Operation::Update {
                id: PointId(7),
                label: "ghost".to_string(),
                time: None,
            },
            Operation::Remove { id: PointId(8) },
            Operation::Update {
                id: PointId(1),
                label: "real".to_string(),
                time: Some(TimeValue::Seconds(2.0)),
            },
        ];

        let mut store = TimePointStore::new(TrackingMode::Advanced);
        let outcome = replay(&mut store, &ops).unwrap();

        assert_eq!(outcome, ReplayOutcome { applied: 2, skipped: 2 });
        assert_eq!(store.points()[0].label, "real");
        assert_eq!(store.points()[0].time, 2.0);
    }

    #[test]
    fn test_replay_error_names_position() {
        let ops = vec![
            Operation::Record {
                time: TimeValue::Seconds(1.0),
            },
            Operation::Record {
                time: TimeValue::Text("nope".to_string()),
            },
        ];

        let mut store = TimePointStore::default();
        let err = replay(&mut store, &ops).unwrap_err();
        assert!(err.to_string().contains("op 2 (record)"));
        assert_eq!(store.len(), 1);
    }
}
