//! Events delivered to a state machine.

use super::ids::EventId;

/// An event: an identifier plus an optional borrowed payload.
///
/// The payload is a view into caller-owned bytes. The engine only looks at it
/// for the duration of a single [`dispatch`](crate::StateMachine::dispatch)
/// call and never stores it, so the borrow checker enforces the
/// "caller owns, engine borrows" contract.
///
/// Events are `Copy`; build a fresh one per dispatch rather than sharing a
/// mutable instance.
///
/// # Example
///
/// ```rust
/// use switchyard::{Event, EventId};
///
/// let bare = Event::new(EventId::new(2));
/// assert!(!bare.has_payload());
///
/// let frame = [0xAA, 0x55];
/// let loaded = Event::with_payload(EventId::new(2), &frame);
/// assert_eq!(loaded.payload(), Some(&frame[..]));
/// assert_eq!(loaded.payload_len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event<'a> {
    id: EventId,
    payload: Option<&'a [u8]>,
}

impl<'a> Event<'a> {
    /// Event without payload.
    pub fn new(id: impl Into<EventId>) -> Self {
        Self {
            id: id.into(),
            payload: None,
        }
    }

    /// Event carrying a borrowed payload.
    pub fn with_payload(id: impl Into<EventId>, payload: &'a [u8]) -> Self {
        Self {
            id: id.into(),
            payload: Some(payload),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn payload(&self) -> Option<&'a [u8]> {
        self.payload
    }

    /// Payload length; zero when there is no payload.
    pub fn payload_len(&self) -> usize {
        self.payload.map_or(0, <[u8]>::len)
    }

    /// True when a non-empty payload is attached.
    pub fn has_payload(&self) -> bool {
        self.payload_len() > 0
    }
}
