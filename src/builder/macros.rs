//! Macros for naming states and events with enums.

/// Declare a fieldless enum whose variants are state ids.
///
/// Variants number from zero in declaration order. The enum converts into
/// [`StateId`](crate::StateId) and gets `name()`, `ALL` and `from_id()`.
///
/// # Example
///
/// ```
/// use switchyard::{state_enum, StateId};
///
/// state_enum! {
///     pub enum Phase {
///         Init,
///         Run,
///         Error,
///     }
/// }
///
/// assert_eq!(StateId::from(Phase::Run), StateId::new(1));
/// assert_eq!(Phase::from_id(StateId::new(2)), Some(Phase::Error));
/// assert_eq!(Phase::Init.name(), "Init");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__id_enum! {
            $crate::StateId;
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant
                ),*
            }
        }
    };
}

/// Declare a fieldless enum whose variants are event ids.
///
/// Same shape as [`state_enum!`], converting into [`EventId`](crate::EventId)
/// so the variants can be passed wherever an event id is expected.
///
/// # Example
///
/// ```
/// use switchyard::{event_enum, Event, EventId};
///
/// event_enum! {
///     enum Signal {
///         Start,
///         Stop,
///     }
/// }
///
/// let event = Event::new(Signal::Stop);
/// assert_eq!(event.id(), EventId::new(1));
/// assert_eq!(Signal::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__id_enum! {
            $crate::EventId;
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant
                ),*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __id_enum {
    (
        $id:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant in id order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            /// Variant for a raw id, if one exists.
            pub fn from_id(id: $id) -> Option<Self> {
                Self::ALL.get(id.index()).copied()
            }
        }

        impl From<$name> for $id {
            fn from(value: $name) -> Self {
                <$id>::new(value as u32)
            }
        }
    };
}
