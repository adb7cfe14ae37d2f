//! Backend configuration

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how long to wait for the chat service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Full URL of the chat endpoint
    pub endpoint: String,
    /// Deadline for a single round-trip
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BackendConfig {
    /// Read `TRIP_CHAT_URL` and `TRIP_CHAT_TIMEOUT_SECS`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("TRIP_CHAT_URL").ok(),
            std::env::var("TRIP_CHAT_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(endpoint: Option<String>, timeout_secs: Option<String>) -> Self {
        let endpoint = endpoint
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = match timeout_secs.as_deref().map(str::parse::<u64>) {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(_) => {
                tracing::warn!(
                    value = ?timeout_secs,
                    "Ignoring invalid TRIP_CHAT_TIMEOUT_SECS, using default"
                );
                DEFAULT_TIMEOUT
            }
            None => DEFAULT_TIMEOUT,
        };

        Self { endpoint, timeout }
    }
}
