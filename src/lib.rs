//! flightmark - a time-of-flight marker
//!
//! This crate marks points on a media timeline and measures the elapsed time
//! between them, in a two-slot simple mode or a paired advanced mode.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use core::{Calculator, DurationSummary, TimePoint, TimePointStore, TrackingMode};
pub use error::FlightmarkError;
