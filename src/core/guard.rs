//! Guard predicates for controlling transitions.
//!
//! A guard looks at the incoming event only. When it returns `false` the
//! matching transition is skipped entirely and the event is dropped; no other
//! transition is tried for the same cell.

use super::event::Event;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether a matching transition may fire.
///
/// Guards must be deterministic and free of side effects the machine relies
/// on: a rejected event runs no exit, action or enter callback.
///
/// # Example
///
/// ```rust
/// use switchyard::{Event, Guard};
///
/// let long_frame = Guard::new(|event: &Event| event.payload_len() >= 4);
///
/// assert!(!long_frame.check(&Event::new(0u32)));
/// assert!(long_frame.check(&Event::with_payload(0u32, &[1, 2, 3, 4])));
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn(&Event<'_>) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate over the event.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Event<'_>) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that admits only events carrying a non-empty payload.
    ///
    /// ```rust
    /// use switchyard::{Event, Guard};
    ///
    /// let guard = Guard::has_payload();
    /// assert!(!guard.check(&Event::new(1u32)));
    /// assert!(guard.check(&Event::with_payload(1u32, b"go")));
    /// ```
    pub fn has_payload() -> Self {
        Guard::new(|event: &Event<'_>| event.has_payload())
    }

    /// Evaluate the predicate against an event.
    pub fn check(&self, event: &Event<'_>) -> bool {
        (self.predicate)(event)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
