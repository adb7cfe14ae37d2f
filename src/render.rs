//! Plain-text rendering of sessions and directives
//!
//! Used by the terminal front-end. Each function returns the lines to print.

use crate::backend::{PlaceEntry, Temperature, WeatherReport};
use crate::runtime::{OrchestratorError, PreconditionError};
use crate::state_machine::{Identity, Payload, PresentationDirective, Role, Turn};

/// Height the map fragment is displayed at, in pixels
pub const MAP_DISPLAY_HEIGHT: u32 = 500;

pub fn greeting(identity: &Identity) -> String {
    format!(
        "👋 Hi {}! I'm here to help you plan a fun and memorable day out. Let's chat!",
        identity.username
    )
}

/// One line per turn, oldest first
pub fn transcript(identity: &Identity, history: &[Turn]) -> Vec<String> {
    history
        .iter()
        .map(|turn| match turn.role {
            Role::User => format!("{}: {}", identity.username, turn.content),
            Role::Assistant => format!("Assistant: {}", turn.content),
        })
        .collect()
}

/// Assistant line followed by the panel selected by the payload
pub fn directive(directive: &PresentationDirective) -> Vec<String> {
    let mut lines = vec![format!("Assistant: {}", directive.assistant_message)];
    match &directive.payload {
        Payload::None => {}
        Payload::Itinerary(places) => itinerary(places, &mut lines),
        Payload::Weather(report) => weather(report, &mut lines),
        Payload::Map(html) => map(html, &mut lines),
    }
    lines
}

fn itinerary(places: &[PlaceEntry], lines: &mut Vec<String>) {
    lines.push("== Itinerary Suggestions ==".to_string());
    for place in places {
        lines.push(format!("📍 {}", place.name.as_deref().unwrap_or("Unknown")));
        lines.push(format!(
            "Address: {}",
            place.address.as_deref().unwrap_or("Address not available")
        ));
        lines.push(format!(
            "Category: {}",
            place.category.as_deref().unwrap_or("Category not available")
        ));
        lines.push("---".to_string());
    }
}

fn weather(report: &WeatherReport, lines: &mut Vec<String>) {
    lines.push("== Weather Forecast ==".to_string());
    if let Some(error) = &report.error {
        lines.push(format!("🚨 {error}"));
        return;
    }

    let temperature = |t: &Option<Temperature>| {
        t.as_ref()
            .map_or_else(|| "N/A".to_string(), ToString::to_string)
    };
    let or_na = |s: &Option<String>| s.clone().unwrap_or_else(|| "N/A".to_string());

    lines.push(format!(
        "🌤️ Date: {}",
        report.date.as_deref().unwrap_or("Date not available")
    ));
    lines.push(format!(
        "🌡️ Min Temperature: {}°C",
        temperature(&report.min_temperature)
    ));
    lines.push(format!(
        "🌡️ Max Temperature: {}°C",
        temperature(&report.max_temperature)
    ));
    lines.push(format!("🌞 Day Condition: {}", or_na(&report.day_condition)));
    lines.push(format!("🌜 Night Condition: {}", or_na(&report.night_condition)));
    lines.push(format!(
        "💡 Recommendation: {}",
        report
            .recommendation
            .as_deref()
            .unwrap_or("No recommendation available")
    ));
}

fn map(html: &str, lines: &mut Vec<String>) {
    lines.push("== Itinerary Map ==".to_string());
    lines.push("🌍 Here's a map to guide you:".to_string());
    lines.push(format!("<!-- height: {MAP_DISPLAY_HEIGHT}px -->"));
    lines.push(html.to_string());
}

/// User-visible message for a failed submission
pub fn error(err: &OrchestratorError) -> String {
    match err {
        OrchestratorError::Precondition(PreconditionError::EmptyMessage) => {
            "Please enter a message to continue the conversation.".to_string()
        }
        OrchestratorError::Precondition(PreconditionError::IdentityNotEstablished) => {
            name_required()
        }
        OrchestratorError::BackendUnavailable {
            status: Some(code),
            message,
        } => format!("🚨 Error {code}: {message}"),
        OrchestratorError::BackendUnavailable {
            status: None,
            message,
        } => format!("🚨 Error {message}"),
        OrchestratorError::MalformedReply(_) => {
            "😕 Oops! Something went wrong. The response was not understood, please try again."
                .to_string()
        }
        OrchestratorError::Cancelled => "Request cancelled.".to_string(),
    }
}

/// Prompt shown until a non-blank name is given
pub fn name_required() -> String {
    "Please enter your name to proceed.".to_string()
}
