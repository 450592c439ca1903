//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::{TransitionBuilder, TransitionDef};
use crate::core::{Handler, StateId};
use crate::engine::{StateMachine, DEFAULT_MAX_EVENTS, DEFAULT_MAX_STATES};

/// Builder for constructing state machines with a fluent API.
///
/// Registration happens in `build()`, in the order transitions and hooks
/// were added, so a later transition for the same `(from, event)` cell
/// replaces an earlier one exactly as direct registration would.
///
/// # Example
///
/// ```
/// use switchyard::builder::{simple_transition, MachineBuilder};
/// use switchyard::{Event, StateMachine};
///
/// let mut machine: StateMachine = MachineBuilder::new()
///     .initial(0u32)
///     .add_transition(simple_transition(0u32, 1u32, 0u32))
///     .add_transition(simple_transition(1u32, 0u32, 1u32))
///     .build()
///     .unwrap();
///
/// machine.dispatch(Event::new(0u32));
/// assert_eq!(machine.current_state().get(), 1);
/// ```
pub struct MachineBuilder<
    const STATES: usize = DEFAULT_MAX_STATES,
    const EVENTS: usize = DEFAULT_MAX_EVENTS,
> {
    initial: Option<StateId>,
    transitions: Vec<TransitionDef>,
    on_enter: Vec<(StateId, Handler)>,
    on_exit: Vec<(StateId, Handler)>,
}

impl<const STATES: usize, const EVENTS: usize> MachineBuilder<STATES, EVENTS> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            on_enter: Vec::new(),
            on_exit: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let def = builder.build()?;
        self.transitions.push(def);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, def: TransitionDef) -> Self {
        self.transitions.push(def);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, defs: Vec<TransitionDef>) -> Self {
        self.transitions.extend(defs);
        self
    }

    /// Attach an on-enter hook to `state`.
    pub fn on_enter(mut self, state: impl Into<StateId>, handler: Handler) -> Self {
        self.on_enter.push((state.into(), handler));
        self
    }

    /// Attach an on-exit hook to `state`.
    pub fn on_exit(mut self, state: impl Into<StateId>, handler: Handler) -> Self {
        self.on_exit.push((state.into(), handler));
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or any id is out
    /// of range for the machine's capacity.
    pub fn build(self) -> Result<StateMachine<STATES, EVENTS>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let mut machine = StateMachine::new(initial)?;

        for def in self.transitions {
            machine.add_transition_with_guard(def.from, def.to, def.event, def.action, def.guard)?;
        }
        for (state, handler) in self.on_enter {
            machine.assign_on_enter(state, Some(handler))?;
        }
        for (state, handler) in self.on_exit {
            machine.assign_on_exit(state, Some(handler))?;
        }

        Ok(machine)
    }
}

impl<const STATES: usize, const EVENTS: usize> Default for MachineBuilder<STATES, EVENTS> {
    fn default() -> Self {
        Self::new()
    }
}
