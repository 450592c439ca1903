//! Index validation for registrations.
//!
//! Checks are accumulated with `Validation` so a registration that gets
//! several indices wrong reports all of them at once instead of the first.

use crate::core::{EventId, StateId};
use crate::engine::error::IndexError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single index check.
pub(crate) type IndexCheck = Validation<(), NonEmptyVec<IndexError>>;

pub(crate) fn check_state(state: StateId, capacity: usize) -> IndexCheck {
    if state.index() < capacity {
        Validation::success(())
    } else {
        Validation::fail(IndexError::StateOutOfRange { state, capacity })
    }
}

pub(crate) fn check_event(event: EventId, capacity: usize) -> IndexCheck {
    if event.index() < capacity {
        Validation::success(())
    } else {
        Validation::fail(IndexError::EventOutOfRange { event, capacity })
    }
}

/// Validate every index of a transition registration.
///
/// Returns all violations in argument order: `from`, `to`, then `event`.
pub(crate) fn check_transition(
    from: StateId,
    to: StateId,
    event: EventId,
    states: usize,
    events: usize,
) -> Result<(), Vec<IndexError>> {
    let checks: Vec<IndexCheck> = vec![
        check_state(from, states),
        check_state(to, states),
        check_event(event, events),
    ];

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
