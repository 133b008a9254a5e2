//! Crate-level error types.

use std::fmt;

/// Errors produced by the cadre crate.
///
/// All variants originate in the windowing integration; the input state
/// store itself has no failure modes (every operation on valid, typed
/// identifiers is total).
#[derive(Debug)]
pub enum CadreError {
    /// Event-loop creation or execution failure.
    EventLoop(String),
    /// Window creation failure.
    Window(String),
}

impl fmt::Display for CadreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(msg) => write!(f, "event loop error: {msg}"),
            Self::Window(msg) => write!(f, "window error: {msg}"),
        }
    }
}

impl std::error::Error for CadreError {}
