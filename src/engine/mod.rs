//! The transition engine.
//!
//! - Fixed-capacity transition and state tables
//! - Registration with index validation
//! - The guarded dispatch algorithm: exit, action, state update, enter

mod error;
mod machine;
mod table;
mod validation;

pub use error::{EngineError, IndexError};
pub use machine::{Dispatch, Outcome, StateMachine, DEFAULT_MAX_EVENTS, DEFAULT_MAX_STATES};
pub use table::{StateView, TransitionView};
