//! Conversation history and current context for one session

use super::state::{ContextState, ConversationHistory, Role, Turn};
use super::transition;
use serde::{Deserialize, Serialize};

/// Owns the transcript and the current presentation context.
///
/// History is append-only. The context only moves through [`Self::apply`],
/// which routes the reply through [`transition::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextTracker {
    history: ConversationHistory,
    current: ContextState,
}

impl ContextTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a tracker from a previous [`Self::snapshot`]
    pub fn resume(history: ConversationHistory, current: ContextState) -> Self {
        Self { history, current }
    }

    /// Append a turn
    pub fn record_turn(&mut self, role: Role, content: impl Into<String>) {
        self.history.push(Turn::new(role, content));
    }

    /// Next context for a reply. Pure, see [`transition::update`].
    pub fn update(previous: ContextState, assistant_reply: &str) -> ContextState {
        transition::update(previous, assistant_reply)
    }

    /// Move the current context according to the assistant's reply
    pub fn apply(&mut self, assistant_reply: &str) -> ContextState {
        let next = Self::update(self.current, assistant_reply);
        if next != self.current {
            tracing::debug!(from = %self.current, to = %next, "Context changed");
        }
        self.current = next;
        next
    }

    /// Copy of the transcript and current context
    pub fn snapshot(&self) -> (ConversationHistory, ContextState) {
        (self.history.clone(), self.current)
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn current(&self) -> ContextState {
        self.current
    }
}
