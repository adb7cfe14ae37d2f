//! Orchestrator error types

use crate::backend::{BackendError, BackendErrorKind};
use std::time::Duration;
use thiserror::Error;

/// Identity step called with a blank name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Name must not be empty")]
pub struct EmptyNameError;

/// Why a submission was refused before reaching the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Identity must be established before sending messages")]
    IdentityNotEstablished,
    #[error("Message must not be empty")]
    EmptyMessage,
}

/// Errors returned by [`super::DialogueOrchestrator::submit`]
///
/// None of these touch the session: history and context stay as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrchestratorError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// Network failure, non-200 status or timeout
    #[error("Chat backend unavailable{}: {message}", status_suffix(.status))]
    BackendUnavailable {
        status: Option<u16>,
        message: String,
    },

    /// 200, but the body was not a chat reply
    #[error("Malformed reply from chat backend: {0}")]
    MalformedReply(String),

    #[error("Request cancelled")]
    Cancelled,
}

#[allow(clippy::ref_option)] // thiserror hands fields over by reference
fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (HTTP {code})")).unwrap_or_default()
}

impl OrchestratorError {
    pub fn timeout(after: Duration) -> Self {
        OrchestratorError::BackendUnavailable {
            status: None,
            message: format!("no reply within {}ms", after.as_millis()),
        }
    }

    /// Whether sending the same message again may succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, OrchestratorError::Precondition(_))
    }
}

impl From<BackendError> for OrchestratorError {
    fn from(err: BackendError) -> Self {
        match err.kind {
            BackendErrorKind::Malformed => OrchestratorError::MalformedReply(err.message),
            BackendErrorKind::Status | BackendErrorKind::Network | BackendErrorKind::Timeout => {
                OrchestratorError::BackendUnavailable {
                    status: err.status,
                    message: err.message,
                }
            }
        }
    }
}
