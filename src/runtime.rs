//! Runtime for driving conversations
//!
//! Sessions are independent: each lives behind its own lock, and the
//! orchestrator holds no per-session state.

mod error;
mod executor;
mod session;


pub use error::{EmptyNameError, OrchestratorError, PreconditionError};
pub use executor::DialogueOrchestrator;
pub use session::{Session, SessionSnapshot};

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared handle to one session. Hold the lock for the whole `submit`.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Registry of live sessions keyed by id
#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh session and register it
    pub async fn create(&self) -> (String, SessionHandle) {
        let session = Session::new();
        let id = session.id().to_string();
        let handle = self.insert(session).await;
        (id, handle)
    }

    /// Register an existing session, replacing any session with the same id
    pub async fn insert(&self, session: Session) -> SessionHandle {
        let id = session.id().to_string();
        let handle = Arc::new(Mutex::new(session));
        let previous = self
            .sessions
            .write()
            .await
            .insert(id.clone(), Arc::clone(&handle));
        if previous.is_some() {
            tracing::warn!(session_id = %id, "Replaced existing session");
        } else {
            tracing::info!(session_id = %id, "Session created");
        }
        handle
    }

    pub async fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Drop a session from the registry; outstanding handles stay valid
    pub async fn remove(&self, id: &str) -> Option<SessionHandle> {
        let removed = self.sessions.write().await.remove(id);
        if removed.is_some() {
            tracing::info!(session_id = %id, "Session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
