//! Wire types exchanged with the chat backend

use crate::state_machine::ContextState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assistant text used when a reply carries no `message`
pub const FALLBACK_MESSAGE: &str = "I didn't quite catch that. Could you please clarify?";

/// Request body for the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
    /// Hint only, the backend keeps its own notion of context
    pub context: ContextState,
}

/// Reply body from the chat endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<PlaceEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReport>,
    /// HTML fragment for an embedded map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

impl ChatReply {
    /// Plain text reply with no panels
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Assistant text, falling back to a clarification prompt
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or(FALLBACK_MESSAGE)
    }
}

/// One suggested place in an itinerary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Forecast block. `error` takes precedence over everything else when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub min_temperature: Option<Temperature>,
    #[serde(default)]
    pub max_temperature: Option<Temperature>,
    #[serde(default)]
    pub day_condition: Option<String>,
    #[serde(default)]
    pub night_condition: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Temperature in degrees Celsius, as a number or preformatted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Temperature {
    Degrees(f64),
    Text(String),
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Degrees(d) => write!(f, "{d}"),
            Temperature::Text(t) => f.write_str(t),
        }
    }
}
