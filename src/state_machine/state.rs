//! Conversation state types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Presentation Context
// ============================================================================

/// Presentation mode guiding which panel the caller renders next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContextState {
    /// Fresh session, nothing submitted yet
    #[default]
    Initial,
    Preferences,
    ItinerarySuggestions,
    WeatherInfo,
    MapInfo,
    General,
}

impl ContextState {
    /// All contexts, in declaration order
    pub const ALL: [ContextState; 6] = [
        ContextState::Initial,
        ContextState::Preferences,
        ContextState::ItinerarySuggestions,
        ContextState::WeatherInfo,
        ContextState::MapInfo,
        ContextState::General,
    ];

    /// Name used on the wire when the context is sent to the backend
    pub fn wire_name(self) -> &'static str {
        match self {
            ContextState::Initial => "initial",
            ContextState::Preferences => "preferences",
            ContextState::ItinerarySuggestions => "itinerary_suggestions",
            ContextState::WeatherInfo => "weather_info",
            ContextState::MapInfo => "map_info",
            ContextState::General => "general",
        }
    }
}

impl fmt::Display for ContextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ============================================================================
// Turns
// ============================================================================

/// Who said it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation. Never mutated after being appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Oldest-first, append-only
pub type ConversationHistory = Vec<Turn>;

// ============================================================================
// Identity
// ============================================================================

/// Who the session belongs to. Set once at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub established: bool,
}

impl Identity {
    /// Build an identity from user input. Blank names are not established.
    pub fn from_name(name: &str) -> Self {
        let username = name.trim().to_string();
        let established = !username.is_empty();
        Self {
            username,
            established,
        }
    }
}
