//! Build errors for machine and transition builders.

use crate::engine::EngineError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error(transparent)]
    Engine(#[from] EngineError),
}
