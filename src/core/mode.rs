//! Tracking modes and the policies that depend on them.
//!
//! Every mode-dependent rule lives here so that the store and the calculator
//! match on a single variant instead of checking flags.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How marked points are tracked and reduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    /// Two slots (start and end); adding beyond capacity overwrites the end.
    #[default]
    Simple,
    /// Unbounded points reduced pairwise.
    Advanced,
}

/// What `add` should do with the existing sequence before inserting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Keep everything and append.
    Append,
    /// Keep only the earliest point, then append.
    ReplaceLater,
}

/// How the total of a snapshot is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalRule {
    /// Last time minus first time.
    Span,
    /// Sum of consecutive pair durations.
    SumOfPairs,
}

impl TrackingMode {
    /// Number of start/end slots in simple mode.
    pub const SIMPLE_CAPACITY: usize = 2;

    /// Maximum number of points `add` keeps, if bounded.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::Simple => Some(Self::SIMPLE_CAPACITY),
            Self::Advanced => None,
        }
    }

    /// Insertion policy for `add` given the current point count.
    #[must_use]
    pub const fn insertion(self, len: usize) -> Insertion {
        match self {
            Self::Simple if len >= Self::SIMPLE_CAPACITY => Insertion::ReplaceLater,
            Self::Simple | Self::Advanced => Insertion::Append,
        }
    }

    /// Rule used to reduce a snapshot into a total.
    #[must_use]
    pub const fn total_rule(self) -> TotalRule {
        match self {
            Self::Simple => TotalRule::Span,
            Self::Advanced => TotalRule::SumOfPairs,
        }
    }

    /// Whether the calibrated estimate applies.
    #[must_use]
    pub const fn has_estimate(self) -> bool {
        matches!(self, Self::Simple)
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Simple => Self::Advanced,
            Self::Advanced => Self::Simple,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_insertion_policy() {
        let mode = TrackingMode::Simple;
        assert_eq!(mode.insertion(0), Insertion::Append);
        assert_eq!(mode.insertion(1), Insertion::Append);
        assert_eq!(mode.insertion(2), Insertion::ReplaceLater);
        assert_eq!(mode.insertion(5), Insertion::ReplaceLater);
    }

    #[test]
    fn test_advanced_insertion_policy() {
        let mode = TrackingMode::Advanced;
        for len in [0, 1, 2, 10, 1000] {
            assert_eq!(mode.insertion(len), Insertion::Append);
        }
    }

    #[test]
    fn test_capacity() {
        assert_eq!(TrackingMode::Simple.capacity(), Some(2));
        assert_eq!(TrackingMode::Advanced.capacity(), None);
    }

    #[test]
    fn test_total_rule_and_estimate() {
        assert_eq!(TrackingMode::Simple.total_rule(), TotalRule::Span);
        assert_eq!(TrackingMode::Advanced.total_rule(), TotalRule::SumOfPairs);
        assert!(TrackingMode::Simple.has_estimate());
        assert!(!TrackingMode::Advanced.has_estimate());
    }

    #[test]
    fn test_toggled() {
        assert_eq!(TrackingMode::Simple.toggled(), TrackingMode::Advanced);
        assert_eq!(TrackingMode::Advanced.toggled(), TrackingMode::Simple);
    }

    #[test]
    fn test_serde_lowercase() {
        let yaml = serde_yaml::to_string(&TrackingMode::Advanced).unwrap();
        assert_eq!(yaml.trim(), "advanced");
        let mode: TrackingMode = serde_yaml::from_str("simple").unwrap();
        assert_eq!(mode, TrackingMode::Simple);
    }
}
