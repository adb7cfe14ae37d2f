//! Caller-owned conversation session

use crate::state_machine::{ContextState, ContextTracker, ConversationHistory, Identity, Turn};
use serde::{Deserialize, Serialize};

/// One user's conversation: identity plus tracked history and context.
///
/// Owned by the caller and passed by reference into the orchestrator.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    identity: Option<Identity>,
    tracker: ContextTracker,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session with a random id, no identity and `Initial` context
    pub fn new() -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            identity: None,
            tracker: ContextTracker::new(),
        }
    }

    /// Rebuild a session from a snapshot
    pub fn restore(snapshot: SessionSnapshot) -> Self {
        let identity = snapshot.identity.filter(|i| i.established);
        Self {
            id: snapshot.id,
            identity,
            tracker: ContextTracker::resume(snapshot.history, snapshot.context),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (history, context) = self.tracker.snapshot();
        SessionSnapshot {
            id: self.id.clone(),
            identity: self.identity.clone(),
            history,
            context,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Established identity, if any
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn context(&self) -> ContextState {
        self.tracker.current()
    }

    pub fn history(&self) -> &[Turn] {
        self.tracker.history()
    }

    pub(crate) fn tracker_mut(&mut self) -> &mut ContextTracker {
        &mut self.tracker
    }

    /// Set the identity if none is established yet. Returns the identity in effect.
    pub(crate) fn establish(&mut self, identity: Identity) -> &Identity {
        debug_assert!(identity.established);
        self.identity.get_or_insert(identity)
    }
}

/// Serializable copy of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub identity: Option<Identity>,
    pub history: ConversationHistory,
    pub context: ContextState,
}
