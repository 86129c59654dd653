//! Feature implementations for flightmark.
//!
//! - Scripted replay of marking operations
//! - Shell completions

pub mod replay;
pub mod shell;
