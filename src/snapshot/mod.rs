//! Serializable snapshots of a machine's tables.
//!
//! A snapshot is an owned report of what a [`StateMachine`] looks like at one
//! moment: capacities, initial and current state, lifecycle flags per state
//! and every defined transition. Callbacks are not serializable, so a
//! snapshot cannot rebuild a machine; it feeds exporters such as the DOT
//! renderer and external tooling.

use crate::core::StateId;
use crate::engine::{StateMachine, StateView, TransitionView};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time view of a machine's tables.
///
/// # Example
///
/// ```rust
/// use switchyard::{Event, StateMachine};
/// use switchyard::snapshot::Snapshot;
///
/// let mut machine: StateMachine = StateMachine::new(0u32).unwrap();
/// machine.add_transition(0u32, 1u32, 0u32).unwrap();
/// machine.dispatch(Event::new(0u32));
///
/// let snapshot = machine.snapshot();
/// assert_eq!(snapshot.current_state.get(), 1);
/// assert_eq!(snapshot.transitions.len(), 1);
///
/// let json = snapshot.to_json().unwrap();
/// let restored = Snapshot::from_json(&json).unwrap();
/// assert_eq!(restored, snapshot);
/// ```
/// Equality compares the table layout and states, not `taken_at`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub state_capacity: usize,

    pub event_capacity: usize,

    pub initial_state: StateId,

    pub current_state: StateId,

    /// Lifecycle flags for every state, in id order
    pub states: Vec<StateView>,

    /// Defined transitions, ordered by source state then event id
    pub transitions: Vec<TransitionView>,
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.state_capacity == other.state_capacity
            && self.event_capacity == other.event_capacity
            && self.initial_state == other.initial_state
            && self.current_state == other.current_state
            && self.states == other.states
            && self.transitions == other.transitions
    }
}

impl Snapshot {
    /// Capture the current layout of `machine`.
    pub fn capture<const STATES: usize, const EVENTS: usize>(
        machine: &StateMachine<STATES, EVENTS>,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            taken_at: Utc::now(),
            state_capacity: machine.state_capacity(),
            event_capacity: machine.event_capacity(),
            initial_state: machine.initial_state(),
            current_state: machine.current_state(),
            states: machine.states().collect(),
            transitions: machine.transitions().collect(),
        }
    }

    /// Lifecycle flags of `state`, if it is within capacity.
    pub fn state(&self, state: StateId) -> Option<&StateView> {
        self.states.get(state.index())
    }

    /// True if `state` has at least one outgoing transition.
    pub fn has_transitions_from(&self, state: StateId) -> bool {
        self.transitions.iter().any(|t| t.from == state)
    }

    /// Transitions leaving `state`, in event id order.
    pub fn transitions_from(&self, state: StateId) -> impl Iterator<Item = &TransitionView> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check that a decoded snapshot describes a table a machine could have.
    fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let in_states = |state: StateId| state.index() < self.state_capacity;

        if !in_states(self.initial_state) || !in_states(self.current_state) {
            return Err(SnapshotError::ValidationFailed(format!(
                "initial {} / current {} outside {} states",
                self.initial_state, self.current_state, self.state_capacity
            )));
        }

        if self.states.len() != self.state_capacity {
            return Err(SnapshotError::ValidationFailed(format!(
                "{} state entries for capacity {}",
                self.states.len(),
                self.state_capacity
            )));
        }

        if let Some((i, view)) = self
            .states
            .iter()
            .enumerate()
            .find(|(i, view)| view.state.index() != *i)
        {
            return Err(SnapshotError::ValidationFailed(format!(
                "state entry {i} describes state {}",
                view.state
            )));
        }

        if let Some(bad) = self.transitions.iter().find(|t| {
            !in_states(t.from) || !in_states(t.to) || t.event.index() >= self.event_capacity
        }) {
            return Err(SnapshotError::ValidationFailed(format!(
                "transition {} -> {} on event {} outside table bounds",
                bad.from, bad.to, bad.event
            )));
        }

        // One transition per cell, in row-major order.
        if let Some(pair) = self
            .transitions
            .windows(2)
            .find(|pair| (pair[0].from, pair[0].event) >= (pair[1].from, pair[1].event))
        {
            return Err(SnapshotError::ValidationFailed(format!(
                "transition ({}, {}) listed after ({}, {})",
                pair[1].from, pair[1].event, pair[0].from, pair[0].event
            )));
        }

        Ok(())
    }
}
