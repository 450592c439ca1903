//! Engine error types.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// An identifier outside the machine's declared capacity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("state {state} out of range (capacity {capacity})")]
    StateOutOfRange { state: StateId, capacity: usize },

    #[error("event {event} out of range (capacity {capacity})")]
    EventOutOfRange { event: EventId, capacity: usize },
}

/// Errors returned by construction and registration.
///
/// Dispatch never fails: an unmatched or guard-rejected event is a valid
/// outcome, reported through [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(
        "invalid transition {from} -> {to} on event {event}: {} index violation(s)",
        .violations.len()
    )]
    InvalidTransition {
        from: StateId,
        to: StateId,
        event: EventId,
        violations: Vec<IndexError>,
    },
}

impl EngineError {
    /// Every out-of-range index behind this error.
    pub fn violations(&self) -> &[IndexError] {
        match self {
            EngineError::Index(err) => std::slice::from_ref(err),
            EngineError::InvalidTransition { violations, .. } => violations,
        }
    }
}
