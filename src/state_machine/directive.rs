//! Presentation directives produced after each successful turn

use super::ContextState;
use crate::backend::{ChatReply, PlaceEntry, WeatherReport};
use serde::{Deserialize, Serialize};

/// Extra panel to show under the assistant's message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Payload {
    None,
    Itinerary(Vec<PlaceEntry>),
    Weather(WeatherReport),
    /// Raw HTML fragment
    Map(String),
}

impl Payload {
    /// Pick the panel for a reply.
    ///
    /// The backend does not promise that only one of these fields is set, so
    /// precedence is fixed: itinerary, then weather, then map.
    pub fn from_reply(reply: &ChatReply) -> Self {
        if let Some(places) = &reply.itinerary {
            Payload::Itinerary(places.clone())
        } else if let Some(weather) = &reply.weather {
            Payload::Weather(weather.clone())
        } else if let Some(html) = &reply.map {
            Payload::Map(html.clone())
        } else {
            Payload::None
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Payload::None => "none",
            Payload::Itinerary(_) => "itinerary_list",
            Payload::Weather(_) => "weather_panel",
            Payload::Map(_) => "map_html",
        }
    }
}

/// What the caller should display once a turn completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationDirective {
    pub mode: ContextState,
    pub assistant_message: String,
    pub payload: Payload,
}
