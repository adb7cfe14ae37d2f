//! HTTP/JSON chat backend

use super::types::{ChatReply, ChatRequest};
use super::{BackendConfig, BackendError, ChatBackend};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Posts each request as JSON to the configured chat endpoint
pub struct HttpChatBackend {
    client: Client,
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse_reply(status: StatusCode, body: &str) -> Result<ChatReply, BackendError> {
        if status != StatusCode::OK {
            return Err(BackendError::status(status.as_u16(), body));
        }

        serde_json::from_str(body).map_err(|e| {
            BackendError::malformed(format!("Failed to parse reply: {e}"))
                .with_status(status.as_u16())
        })
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::timeout(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    BackendError::network(format!("Connection failed: {e}"))
                } else {
                    BackendError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::timeout(format!("Timed out reading reply: {e}"))
            } else {
                BackendError::network(format!("Failed to read reply: {e}"))
            }
        })?;

        Self::parse_reply(status, &body)
    }
}
