//! Builder for constructing transition definitions.

use crate::builder::error::BuildError;
use crate::core::{Event, EventId, Guard, Handler, StateId};

/// A complete transition, ready to be registered on a machine.
#[derive(Clone, Debug)]
pub struct TransitionDef {
    pub from: StateId,
    pub to: StateId,
    pub event: EventId,
    pub guard: Option<Guard>,
    pub action: Option<Handler>,
}

/// Builder for constructing transitions with a fluent API.
///
/// # Example
///
/// ```
/// use switchyard::builder::TransitionBuilder;
/// use switchyard::Event;
///
/// let def = TransitionBuilder::new()
///     .from(0u32)
///     .to(1u32)
///     .on(4u32)
///     .when(|event: &Event| event.payload_len() == 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(def.event.get(), 4);
/// assert!(def.guard.is_some());
/// ```
#[derive(Default)]
pub struct TransitionBuilder {
    from: Option<StateId>,
    to: Option<StateId>,
    event: Option<EventId>,
    guard: Option<Guard>,
    action: Option<Handler>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<StateId>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<StateId>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: impl Into<EventId>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Event<'_>) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the transition action (optional).
    pub fn action(mut self, handler: Handler) -> Self {
        self.action = Some(handler);
        self
    }

    /// Set the transition action from an event-only closure (optional).
    pub fn then<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Event<'_>) + Send + Sync + 'static,
    {
        self.action = Some(Handler::new(callback));
        self
    }

    /// Build the transition.
    /// Returns an error if a required field is missing.
    pub fn build(self) -> Result<TransitionDef, BuildError> {
        Ok(TransitionDef {
            from: self.from.ok_or(BuildError::MissingFromState)?,
            to: self.to.ok_or(BuildError::MissingToState)?,
            event: self.event.ok_or(BuildError::MissingEvent)?,
            guard: self.guard,
            action: self.action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        assert!(matches!(
            TransitionBuilder::new().build(),
            Err(BuildError::MissingFromState)
        ));
        assert!(matches!(
            TransitionBuilder::new().from(0u32).build(),
            Err(BuildError::MissingToState)
        ));
        assert!(matches!(
            TransitionBuilder::new().from(0u32).to(1u32).build(),
            Err(BuildError::MissingEvent)
        ));
    }

    #[test]
    fn optional_parts_default_to_none() {
        let def = TransitionBuilder::new()
            .from(2u32)
            .to(3u32)
            .on(1u32)
            .build()
            .unwrap();

        assert_eq!(def.from, StateId::new(2));
        assert_eq!(def.to, StateId::new(3));
        assert_eq!(def.event, EventId::new(1));
        assert!(def.guard.is_none());
        assert!(def.action.is_none());
    }

    #[test]
    fn when_and_then_attach_guard_and_action() {
        let def = TransitionBuilder::new()
            .from(0u32)
            .to(0u32)
            .on(0u32)
            .when(|e: &Event| e.has_payload())
            .then(|_: &Event| {})
            .build()
            .unwrap();

        let guard = def.guard.unwrap();
        assert!(!guard.check(&Event::new(0u32)));
        assert!(guard.check(&Event::with_payload(0u32, &[1])));
        assert!(def.action.is_some());
    }

    #[test]
    fn out_of_range_ids_are_not_checked_here() {
        // Capacity belongs to the machine; the builder accepts any id.
        let def = TransitionBuilder::new()
            .from(500u32)
            .to(0u32)
            .on(0u32)
            .build();
        assert!(def.is_ok());
    }
}
