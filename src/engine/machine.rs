//! The state machine engine and its dispatch algorithm.

use crate::core::{Event, EventId, Guard, Handler, StateId};
use crate::engine::error::{EngineError, IndexError};
use crate::engine::table::{StateView, Table, Transition, TransitionView};
use crate::engine::validation;
use crate::snapshot::Snapshot;

/// Default number of states, matching the reference capacity.
pub const DEFAULT_MAX_STATES: usize = 10;

/// Default number of event kinds per state, matching the reference capacity.
pub const DEFAULT_MAX_EVENTS: usize = 20;

/// Result of dispatching a single event.
///
/// Only `Transitioned` changes the machine. The other two variants are
/// normal, silent outcomes: no callback ran and the current state is intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The transition fired: exit, action and enter callbacks ran.
    Transitioned {
        from: StateId,
        to: StateId,
        event: EventId,
    },

    /// No transition is defined for the event in the current state.
    Unhandled { state: StateId, event: EventId },

    /// A transition matched but its guard rejected the event.
    GuardRejected { state: StateId, event: EventId },
}

impl Outcome {
    /// True if the event caused a transition.
    pub fn fired(&self) -> bool {
        matches!(self, Outcome::Transitioned { .. })
    }
}

/// Something events can be dispatched into.
///
/// [`StateMachine`] implements this; re-entrant handlers receive it so they
/// can dispatch follow-up events while a transition is in progress.
pub trait Dispatch {
    /// Dispatch one event and report what happened.
    fn dispatch(&mut self, event: Event<'_>) -> Outcome;

    /// The state the machine is in right now.
    fn current_state(&self) -> StateId;
}

/// Table-driven state machine with fixed capacity.
///
/// `STATES` bounds the state ids and `EVENTS` bounds the event ids. Both
/// tables live inline, so constructing a machine performs no heap allocation
/// and dispatching never allocates.
///
/// The machine is not internally synchronized. Share it across threads only
/// behind a lock held for the whole of each `dispatch`.
///
/// # Example
///
/// ```rust
/// use switchyard::{Event, StateMachine, StateId};
///
/// const INIT: u32 = 0;
/// const RUN: u32 = 1;
/// const ERROR: u32 = 2;
///
/// let mut machine: StateMachine = StateMachine::new(INIT).unwrap();
/// machine.add_transition(INIT, RUN, RUN).unwrap();
/// machine.add_transition(RUN, ERROR, ERROR).unwrap();
///
/// machine.dispatch(Event::new(RUN));
/// machine.dispatch(Event::new(ERROR));
/// assert_eq!(machine.current_state(), StateId::new(ERROR));
/// ```
#[derive(Debug)]
pub struct StateMachine<
    const STATES: usize = DEFAULT_MAX_STATES,
    const EVENTS: usize = DEFAULT_MAX_EVENTS,
> {
    initial: StateId,
    current: StateId,
    table: Table<STATES, EVENTS>,
}

impl<const STATES: usize, const EVENTS: usize> StateMachine<STATES, EVENTS> {
    /// Create a machine resting in `initial`, with empty tables.
    pub fn new(initial: impl Into<StateId>) -> Result<Self, EngineError> {
        let initial = initial.into();
        if initial.index() >= STATES {
            return Err(IndexError::StateOutOfRange {
                state: initial,
                capacity: STATES,
            }
            .into());
        }

        Ok(Self {
            initial,
            current: initial,
            table: Table::new(),
        })
    }

    /// Register an unguarded transition without an action.
    ///
    /// A transition already registered for `(from, event)` is replaced.
    pub fn add_transition(
        &mut self,
        from: impl Into<StateId>,
        to: impl Into<StateId>,
        event: impl Into<EventId>,
    ) -> Result<(), EngineError> {
        self.add_transition_with_guard(from, to, event, None, None)
    }

    /// Register a transition with an optional action and guard.
    ///
    /// All indices are validated before the table is touched; every
    /// out-of-range index is reported in the returned error.
    pub fn add_transition_with_guard(
        &mut self,
        from: impl Into<StateId>,
        to: impl Into<StateId>,
        event: impl Into<EventId>,
        action: Option<Handler>,
        guard: Option<Guard>,
    ) -> Result<(), EngineError> {
        let (from, to, event) = (from.into(), to.into(), event.into());

        if let Err(violations) = validation::check_transition(from, to, event, STATES, EVENTS) {
            tracing::warn!(%from, %to, %event, ?violations, "rejected transition registration");
            return Err(EngineError::InvalidTransition {
                from,
                to,
                event,
                violations,
            });
        }

        let slot = self.table.slot_mut(from, event)?;
        let replaced = slot.replace(Transition {
            from,
            to,
            event,
            guard,
            action,
        });
        if let Some(previous) = replaced {
            tracing::debug!(%from, %event, old_to = %previous.to, new_to = %to, "transition overwritten");
        }

        Ok(())
    }

    /// Set or clear the on-enter hook of `state`.
    pub fn assign_on_enter(
        &mut self,
        state: impl Into<StateId>,
        handler: Option<Handler>,
    ) -> Result<(), EngineError> {
        let state = state.into();
        let entry = self
            .table
            .entry_mut(state)
            .inspect_err(|err| tracing::warn!(%err, "rejected on-enter registration"))?;
        entry.on_enter = handler;
        Ok(())
    }

    /// Set or clear the on-exit hook of `state`.
    pub fn assign_on_exit(
        &mut self,
        state: impl Into<StateId>,
        handler: Option<Handler>,
    ) -> Result<(), EngineError> {
        let state = state.into();
        let entry = self
            .table
            .entry_mut(state)
            .inspect_err(|err| tracing::warn!(%err, "rejected on-exit registration"))?;
        entry.on_exit = handler;
        Ok(())
    }

    /// Deliver one event.
    ///
    /// Looks up the cell for `(current_state, event.id())`. If a transition
    /// is defined and its guard (if any) accepts the event, runs in order:
    /// the current state's on-exit hook, the transition action, the state
    /// update, then the on-enter hook of the new current state. Otherwise
    /// nothing happens.
    ///
    /// Handlers may dispatch re-entrantly; a nested dispatch runs to
    /// completion against whatever state it observes before this one
    /// continues.
    pub fn dispatch(&mut self, event: Event<'_>) -> Outcome {
        let from = self.current;
        let id = event.id();

        let Some(transition) = self.table.cell(from, id) else {
            tracing::trace!(state = %from, event = %id, "no transition for event");
            return Outcome::Unhandled { state: from, event: id };
        };

        if let Some(guard) = &transition.guard {
            if !guard.check(&event) {
                tracing::trace!(state = %from, event = %id, "guard rejected event");
                return Outcome::GuardRejected { state: from, event: id };
            }
        }

        let to = transition.to;
        let action = transition.action.clone();

        if let Some(on_exit) = self.table.entry(from).and_then(|e| e.on_exit.clone()) {
            on_exit.call(self, &event);
        }

        if let Some(action) = action {
            action.call(self, &event);
        }

        self.current = to;

        // Resolve the hook only now: it belongs to the new current state.
        if let Some(on_enter) = self.table.entry(self.current).and_then(|e| e.on_enter.clone()) {
            on_enter.call(self, &event);
        }

        tracing::debug!(%from, %to, event = %id, "transition fired");
        Outcome::Transitioned { from, to, event: id }
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    /// Number of states the tables can hold.
    pub const fn state_capacity(&self) -> usize {
        STATES
    }

    /// Number of event ids per state the tables can hold.
    pub const fn event_capacity(&self) -> usize {
        EVENTS
    }

    /// The transition defined at `(from, event)`, if any.
    pub fn transition(
        &self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
    ) -> Option<TransitionView> {
        self.table.cell(from.into(), event.into()).map(Transition::view)
    }

    /// Every defined transition, ordered by source state then event id.
    pub fn transitions(&self) -> impl Iterator<Item = TransitionView> + '_ {
        self.table.iter().map(Transition::view)
    }

    /// Lifecycle hook flags for `state`; `None` if out of range.
    pub fn state(&self, state: impl Into<StateId>) -> Option<StateView> {
        let state = state.into();
        self.table.entry(state).map(|entry| StateView {
            state,
            has_on_enter: entry.on_enter.is_some(),
            has_on_exit: entry.on_exit.is_some(),
        })
    }

    /// Lifecycle hook flags for every state in id order.
    pub fn states(&self) -> impl Iterator<Item = StateView> + '_ {
        (0..STATES as u32).filter_map(move |raw| self.state(raw))
    }

    /// True if `state` has at least one outgoing transition.
    pub fn has_transitions_from(&self, state: impl Into<StateId>) -> bool {
        self.table.row_has_transitions(state.into())
    }

    /// Owned, serializable copy of the table layout and current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

impl<const STATES: usize, const EVENTS: usize> Dispatch for StateMachine<STATES, EVENTS> {
    fn dispatch(&mut self, event: Event<'_>) -> Outcome {
        StateMachine::dispatch(self, event)
    }

    fn current_state(&self) -> StateId {
        StateMachine::current_state(self)
    }
}
