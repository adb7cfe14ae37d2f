//! Core conversation context state machine
//!
//! Pure state transitions: no I/O happens in this module.

mod directive;
pub mod state;
mod tracker;
pub mod transition;

#[cfg(test)]
mod proptests;

pub use directive::{Payload, PresentationDirective};
pub use state::{ContextState, ConversationHistory, Identity, Role, Turn};
pub use tracker::ContextTracker;
pub use transition::update;
