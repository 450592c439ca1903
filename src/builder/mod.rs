//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state machines
//! with minimal boilerplate. Everything here ends in the same registration
//! calls as [`StateMachine`](crate::StateMachine)'s own API.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::{TransitionBuilder, TransitionDef};

use crate::core::{Event, EventId, Guard, StateId};

/// Create an unguarded transition without an action.
///
/// # Example
///
/// ```
/// use switchyard::builder::simple_transition;
/// use switchyard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door {
///         Closed,
///         Open,
///     }
/// }
///
/// event_enum! {
///     enum DoorEvent {
///         Push,
///     }
/// }
///
/// let transition = simple_transition(Door::Closed, Door::Open, DoorEvent::Push);
/// assert!(transition.guard.is_none());
/// ```
pub fn simple_transition(
    from: impl Into<StateId>,
    to: impl Into<StateId>,
    event: impl Into<EventId>,
) -> TransitionDef {
    TransitionDef {
        from: from.into(),
        to: to.into(),
        event: event.into(),
        guard: None,
        action: None,
    }
}

/// Create a transition with a guard predicate.
///
/// # Example
///
/// ```
/// use switchyard::builder::guarded_transition;
/// use switchyard::Event;
///
/// let transition = guarded_transition(0u32, 1u32, 0u32, |event| event.has_payload());
/// let guard = transition.guard.unwrap();
///
/// assert!(!guard.check(&Event::new(0u32)));
/// ```
pub fn guarded_transition<F>(
    from: impl Into<StateId>,
    to: impl Into<StateId>,
    event: impl Into<EventId>,
    guard: F,
) -> TransitionDef
where
    F: Fn(&Event<'_>) -> bool + Send + Sync + 'static,
{
    TransitionDef {
        guard: Some(Guard::new(guard)),
        ..simple_transition(from, to, event)
    }
}
