//! Chat backend abstraction
//!
//! The trip-planning service is an external collaborator. The core only
//! talks to it through [`ChatBackend`].

mod config;
mod error;
mod http;
mod types;

pub use config::{BackendConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::{BackendError, BackendErrorKind};
pub use http::HttpChatBackend;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Capability for one request/reply round-trip with the chat service
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a user message and wait for the assistant's reply
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, BackendError>;
}

#[async_trait]
impl<T: ChatBackend + ?Sized> ChatBackend for Arc<T> {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, BackendError> {
        (**self).send(request).await
    }
}

/// Logging wrapper for chat backends
pub struct LoggingBackend<B> {
    inner: B,
}

impl<B: ChatBackend> LoggingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B: ChatBackend> ChatBackend for LoggingBackend<B> {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, BackendError> {
        let start = std::time::Instant::now();
        let result = self.inner.send(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    user_id = %request.user_id,
                    context = %request.context,
                    duration_ms = %duration.as_millis(),
                    itinerary = reply.itinerary.is_some(),
                    weather = reply.weather.is_some(),
                    map = reply.map.is_some(),
                    "Chat request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    user_id = %request.user_id,
                    context = %request.context,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    status = ?e.status,
                    error = %e.message,
                    "Chat request failed"
                );
            }
        }

        result
    }
}
