//! Fixed-capacity transition and state tables.
//!
//! The transition table is a dense `STATES x EVENTS` grid with at most one
//! transition per `(state, event)` cell. Lookups go through bounds-checked
//! accessors, so a stray index yields `None` or an [`IndexError`] rather
//! than touching a neighbouring cell.

use crate::core::{EventId, Guard, Handler, StateId};
use crate::engine::error::IndexError;
use serde::{Deserialize, Serialize};

/// A registered transition occupying one table cell.
#[derive(Clone, Debug)]
pub(crate) struct Transition {
    pub(crate) from: StateId,
    pub(crate) to: StateId,
    pub(crate) event: EventId,
    pub(crate) guard: Option<Guard>,
    pub(crate) action: Option<Handler>,
}

impl Transition {
    pub(crate) fn view(&self) -> TransitionView {
        TransitionView {
            from: self.from,
            to: self.to,
            event: self.event,
            has_action: self.action.is_some(),
            has_guard: self.guard.is_some(),
        }
    }
}

/// Lifecycle hooks attached to one state.
#[derive(Clone, Debug, Default)]
pub(crate) struct StateEntry {
    pub(crate) on_enter: Option<Handler>,
    pub(crate) on_exit: Option<Handler>,
}

/// Read-only description of a defined transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionView {
    pub from: StateId,
    pub to: StateId,
    pub event: EventId,
    pub has_action: bool,
    pub has_guard: bool,
}

impl TransitionView {
    /// True for transitions that leave and re-enter the same state.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Read-only description of a state's lifecycle hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
    pub state: StateId,
    pub has_on_enter: bool,
    pub has_on_exit: bool,
}

impl StateView {
    /// True when either lifecycle hook is registered.
    pub fn has_lifecycle(&self) -> bool {
        self.has_on_enter || self.has_on_exit
    }
}

#[derive(Debug)]
pub(crate) struct Table<const STATES: usize, const EVENTS: usize> {
    transitions: [[Option<Transition>; EVENTS]; STATES],
    states: [StateEntry; STATES],
}

impl<const STATES: usize, const EVENTS: usize> Table<STATES, EVENTS> {
    pub(crate) fn new() -> Self {
        Self {
            transitions: std::array::from_fn(|_| std::array::from_fn(|_| None)),
            states: std::array::from_fn(|_| StateEntry::default()),
        }
    }

    /// Defined transition at `(from, event)`, if any.
    pub(crate) fn cell(&self, from: StateId, event: EventId) -> Option<&Transition> {
        self.transitions
            .get(from.index())?
            .get(event.index())?
            .as_ref()
    }

    pub(crate) fn slot_mut(
        &mut self,
        from: StateId,
        event: EventId,
    ) -> Result<&mut Option<Transition>, IndexError> {
        let row = self
            .transitions
            .get_mut(from.index())
            .ok_or(IndexError::StateOutOfRange {
                state: from,
                capacity: STATES,
            })?;
        row.get_mut(event.index())
            .ok_or(IndexError::EventOutOfRange {
                event,
                capacity: EVENTS,
            })
    }

    pub(crate) fn entry(&self, state: StateId) -> Option<&StateEntry> {
        self.states.get(state.index())
    }

    pub(crate) fn entry_mut(&mut self, state: StateId) -> Result<&mut StateEntry, IndexError> {
        self.states
            .get_mut(state.index())
            .ok_or(IndexError::StateOutOfRange {
                state,
                capacity: STATES,
            })
    }

    /// Defined transitions in row-major order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().flatten().flatten()
    }

    pub(crate) fn row_has_transitions(&self, state: StateId) -> bool {
        self.transitions
            .get(state.index())
            .is_some_and(|row| row.iter().any(Option::is_some))
    }
}
