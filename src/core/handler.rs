//! Callbacks run when a transition fires.
//!
//! The same type backs on-enter hooks, on-exit hooks and transition actions.

use super::event::Event;
use crate::engine::Dispatch;
use std::fmt;
use std::sync::Arc;

type HandlerFn = dyn Fn(&mut dyn Dispatch, &Event<'_>) + Send + Sync;

/// A lifecycle hook or transition action.
///
/// Handlers are reference counted, so cloning one is cheap and the engine can
/// hold its own handle while the callback runs. A handler built with
/// [`Handler::reentrant`] receives the machine it is running on and may
/// dispatch further events; those nested dispatches complete before the
/// outer one continues.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use switchyard::{Event, Handler, StateMachine};
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&hits);
/// let on_enter = Handler::new(move |_event: &Event| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let mut machine: StateMachine = StateMachine::new(0u32).unwrap();
/// machine.add_transition(0u32, 1u32, 0u32).unwrap();
/// machine.assign_on_enter(1u32, Some(on_enter)).unwrap();
///
/// machine.dispatch(Event::new(0u32));
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Handler {
    callback: Arc<HandlerFn>,
}

impl Handler {
    /// Handler that only needs the event.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Event<'_>) + Send + Sync + 'static,
    {
        Handler {
            callback: Arc::new(move |_: &mut dyn Dispatch, event: &Event<'_>| callback(event)),
        }
    }

    /// Handler that can dispatch into the machine it is running on.
    pub fn reentrant<F>(callback: F) -> Self
    where
        F: Fn(&mut dyn Dispatch, &Event<'_>) + Send + Sync + 'static,
    {
        Handler {
            callback: Arc::new(callback),
        }
    }

    pub(crate) fn call(&self, machine: &mut dyn Dispatch, event: &Event<'_>) {
        (self.callback)(machine, event)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}
