//! Pure context transition function
//!
//! The next presentation context is picked by an ordered keyword rule list.
//! First match wins; nothing matching falls through to `General`.

use super::ContextState;

/// Condition a reply must satisfy for a rule to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Keyword only counts while the conversation is in the given context
    KeywordWhile {
        context: ContextState,
        keyword: &'static str,
    },
    /// Keyword counts in any context
    Keyword(&'static str),
}

/// One entry of the routing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub trigger: Trigger,
    pub next: ContextState,
}

impl Rule {
    /// `lowered_reply` must already be lowercased
    fn matches(&self, previous: ContextState, lowered_reply: &str) -> bool {
        match self.trigger {
            Trigger::KeywordWhile { context, keyword } => {
                previous == context && lowered_reply.contains(keyword)
            }
            Trigger::Keyword(keyword) => lowered_reply.contains(keyword),
        }
    }
}

/// Routing table, evaluated top to bottom
pub const RULES: &[Rule] = &[
    Rule {
        trigger: Trigger::KeywordWhile {
            context: ContextState::Preferences,
            keyword: "itinerary",
        },
        next: ContextState::ItinerarySuggestions,
    },
    Rule {
        trigger: Trigger::Keyword("weather"),
        next: ContextState::WeatherInfo,
    },
    Rule {
        trigger: Trigger::Keyword("map"),
        next: ContextState::MapInfo,
    },
];

/// Context reached when no rule matches
pub const FALLBACK: ContextState = ContextState::General;

/// Compute the next context from the previous one and the assistant's reply.
///
/// Pure: no I/O, same inputs always give the same output. Keyword matching is
/// a case-insensitive substring test.
pub fn update(previous: ContextState, assistant_reply: &str) -> ContextState {
    let lowered = assistant_reply.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(previous, &lowered))
        .map_or(FALLBACK, |rule| rule.next)
}
