//! Bounded identifiers for states and events.
//!
//! Both identifiers are plain indices into the engine's fixed tables. They
//! carry no capacity of their own; range checks happen when an identifier is
//! handed to a [`StateMachine`](crate::StateMachine).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a state, valid in `[0, STATES)` for a given machine.
///
/// # Example
///
/// ```rust
/// use switchyard::StateId;
///
/// let run = StateId::new(1);
/// assert_eq!(run.index(), 1);
/// assert_eq!(StateId::from(1u32), run);
/// assert_eq!(run.to_string(), "1");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

/// Index of an event kind, valid in `[0, EVENTS)` for a given machine.
///
/// The event id doubles as the column of the transition table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u32);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Wrap a raw index.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Raw value.
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Value as a table index.
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_id!(StateId);
impl_id!(EventId);
