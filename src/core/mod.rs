//! Core value types shared by the engine, builders and exporters.
//!
//! - Identifiers for states and events
//! - Events with borrowed payloads
//! - Guard predicates and transition/lifecycle handlers

mod event;
mod guard;
mod handler;
mod ids;

pub use event::Event;
pub use guard::Guard;
pub use handler::Handler;
pub use ids::{EventId, StateId};
