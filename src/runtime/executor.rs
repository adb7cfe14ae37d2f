//! Dialogue orchestrator: one backend round-trip per submitted message

use super::error::{EmptyNameError, OrchestratorError, PreconditionError};
use super::session::Session;
use crate::backend::{ChatBackend, ChatRequest};
use crate::state_machine::{Identity, Payload, PresentationDirective, Role};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Drives a session through user message → backend reply → directive.
///
/// Holds no session state of its own, so one orchestrator can serve any
/// number of sessions. Each call takes the session by `&mut`, which keeps a
/// single session strictly sequential.
pub struct DialogueOrchestrator<B: ChatBackend> {
    backend: B,
    timeout: Duration,
}

impl<B: ChatBackend> DialogueOrchestrator<B> {
    pub fn new(backend: B, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Attach a user name to the session.
    ///
    /// The identity is fixed once established; later calls return the
    /// existing one unchanged.
    pub fn establish_identity(
        &self,
        session: &mut Session,
        name: &str,
    ) -> Result<Identity, EmptyNameError> {
        let candidate = Identity::from_name(name);
        if !candidate.established {
            return Err(EmptyNameError);
        }

        if let Some(existing) = session.identity() {
            if existing.username != candidate.username {
                tracing::warn!(
                    session_id = %session.id(),
                    username = %existing.username,
                    "Identity already established, ignoring new name"
                );
            }
        }

        let identity = session.establish(candidate).clone();
        tracing::info!(
            session_id = %session.id(),
            username = %identity.username,
            "Identity established"
        );
        Ok(identity)
    }

    /// Send a user message and update the session from the reply
    pub async fn submit(
        &self,
        session: &mut Session,
        user_message: &str,
    ) -> Result<PresentationDirective, OrchestratorError> {
        self.submit_with_cancel(session, user_message, CancellationToken::new())
            .await
    }

    /// Like [`Self::submit`], but gives up with `Cancelled` once `cancel` fires.
    ///
    /// The session is only mutated after a reply has arrived, so a cancelled,
    /// failed, timed out or dropped call leaves it exactly as it was.
    pub async fn submit_with_cancel(
        &self,
        session: &mut Session,
        user_message: &str,
        cancel: CancellationToken,
    ) -> Result<PresentationDirective, OrchestratorError> {
        let request = Self::build_request(session, user_message)?;

        tracing::debug!(
            session_id = %session.id(),
            context = %request.context,
            "Sending chat request"
        );

        let reply = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::info!(session_id = %session.id(), "Chat request cancelled");
                return Err(OrchestratorError::Cancelled);
            }
            result = tokio::time::timeout(self.timeout, self.backend.send(&request)) => {
                match result {
                    Ok(Ok(reply)) => reply,
                    Ok(Err(e)) => {
                        tracing::warn!(
                            session_id = %session.id(),
                            error = %e,
                            "Chat request failed"
                        );
                        return Err(e.into());
                    }
                    Err(_) => {
                        tracing::warn!(
                            session_id = %session.id(),
                            timeout_ms = %self.timeout.as_millis(),
                            "Chat request timed out"
                        );
                        return Err(OrchestratorError::timeout(self.timeout));
                    }
                }
            }
        };

        // Commit: everything below is infallible
        let assistant_message = reply.message_text().to_string();
        let tracker = session.tracker_mut();
        tracker.record_turn(Role::User, user_message);
        tracker.record_turn(Role::Assistant, assistant_message.clone());
        let mode = tracker.apply(&assistant_message);

        let payload = Payload::from_reply(&reply);
        tracing::info!(
            session_id = %session.id(),
            mode = %mode,
            payload = payload.kind(),
            turns = session.history().len(),
            "Turn completed"
        );

        Ok(PresentationDirective {
            mode,
            assistant_message,
            payload,
        })
    }

    fn build_request(
        session: &Session,
        user_message: &str,
    ) -> Result<ChatRequest, PreconditionError> {
        let identity = session
            .identity()
            .filter(|i| i.established)
            .ok_or(PreconditionError::IdentityNotEstablished)?;

        if user_message.trim().is_empty() {
            return Err(PreconditionError::EmptyMessage);
        }

        Ok(ChatRequest {
            user_id: identity.username.clone(),
            message: user_message.to_string(),
            context: session.context(),
        })
    }
}
