//! Switchyard: a table-driven event state machine engine
//!
//! Switchyard is meant to sit inside firmware, protocol handlers and drivers:
//! a small, fixed set of states reacting to a bounded set of event kinds, with
//! deterministic, bounded-time dispatch. The transition table is a dense
//! `STATES x EVENTS` grid fixed at compile time; dispatching never allocates.
//!
//! # Core Concepts
//!
//! - **States and events**: bounded integer ids ([`StateId`], [`EventId`]),
//!   optionally named through [`state_enum!`] and [`event_enum!`]
//! - **Transitions**: at most one per `(state, event)` cell, with an optional
//!   [`Guard`] and an optional action [`Handler`]
//! - **Lifecycle hooks**: per-state on-enter and on-exit handlers
//! - **Dispatch**: exit the old state, run the action, move, enter the new
//!   state; unmatched or guard-rejected events are silently ignored
//! - **Export**: [`snapshot`] and [`viz`] give read-only views of the table
//!
//! # Example
//!
//! ```rust
//! use switchyard::{event_enum, state_enum, Event, Guard, StateId, StateMachine};
//!
//! state_enum! {
//!     enum Mode {
//!         Init,
//!         Run,
//!         Error,
//!     }
//! }
//!
//! event_enum! {
//!     enum Signal {
//!         Start,
//!         Fault,
//!         Reset,
//!     }
//! }
//!
//! let mut machine: StateMachine = StateMachine::new(Mode::Init).unwrap();
//! machine
//!     .add_transition_with_guard(Mode::Init, Mode::Run, Signal::Start, None, Some(Guard::has_payload()))
//!     .unwrap();
//! machine.add_transition(Mode::Run, Mode::Error, Signal::Fault).unwrap();
//! machine.add_transition(Mode::Error, Mode::Init, Signal::Reset).unwrap();
//!
//! // The guard drops a start request without a payload.
//! machine.dispatch(Event::new(Signal::Start));
//! assert_eq!(machine.current_state(), StateId::from(Mode::Init));
//!
//! machine.dispatch(Event::with_payload(Signal::Start, b"cfg"));
//! assert_eq!(Mode::from_id(machine.current_state()), Some(Mode::Run));
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod snapshot;
pub mod viz;

// Re-export commonly used types
pub use self::core::{Event, EventId, Guard, Handler, StateId};
pub use engine::{
    Dispatch, EngineError, IndexError, Outcome, StateMachine, StateView, TransitionView,
    DEFAULT_MAX_EVENTS, DEFAULT_MAX_STATES,
};
