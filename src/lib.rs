//! Trip-planner chat core
//!
//! Tracks a conversation with a remote trip-planning service and decides,
//! after every reply, which panel the front-end should show next.

pub mod backend;
pub mod render;
pub mod runtime;
pub mod state_machine;

pub use backend::{
    BackendConfig, ChatBackend, ChatReply, ChatRequest, HttpChatBackend, LoggingBackend,
};
pub use runtime::{DialogueOrchestrator, OrchestratorError, Session, SessionManager};
pub use state_machine::{ContextState, ContextTracker, Payload, PresentationDirective};
