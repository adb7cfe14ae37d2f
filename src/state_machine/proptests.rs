//! Property-based tests for the context state machine
//!
//! These tests verify the routing invariants hold across arbitrary replies.

use super::state::*;
use super::tracker::ContextTracker;
use super::transition::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_context() -> impl Strategy<Value = ContextState> {
    prop::sample::select(ContextState::ALL.to_vec())
}

/// Filler text that cannot accidentally contain any routing keyword
fn arb_filler() -> impl Strategy<Value = String> {
    "[b-df-hj-z ]{0,20}"
}

/// A keyword with randomized letter case
fn arb_cased(word: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

fn surround(prefix: &str, middle: &str, suffix: &str) -> String {
    format!("{prefix}{middle}{suffix}")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_update_is_deterministic(prev in arb_context(), reply in ".{0,40}") {
        prop_assert_eq!(update(prev, &reply), update(prev, &reply));
    }

    #[test]
    fn prop_never_returns_initial_or_preferences(prev in arb_context(), reply in ".{0,40}") {
        let next = update(prev, &reply);
        prop_assert_ne!(next, ContextState::Initial);
        prop_assert_ne!(next, ContextState::Preferences);
    }

    #[test]
    fn prop_weather_any_case(
        prev in arb_context(),
        word in arb_cased("weather"),
        a in arb_filler(),
        b in arb_filler(),
    ) {
        prop_assume!(prev != ContextState::Preferences);
        let reply = surround(&a, &word, &b);
        prop_assert_eq!(update(prev, &reply), ContextState::WeatherInfo);
    }

    #[test]
    fn prop_weather_beats_map(
        prev in arb_context(),
        weather in arb_cased("weather"),
        map in arb_cased("map"),
        a in arb_filler(),
        weather_first in any::<bool>(),
    ) {
        prop_assume!(prev != ContextState::Preferences);
        let reply = if weather_first {
            format!("{weather}{a}{map}")
        } else {
            format!("{map}{a}{weather}")
        };
        prop_assert_eq!(update(prev, &reply), ContextState::WeatherInfo);
    }

    #[test]
    fn prop_itinerary_only_after_preferences(
        prev in arb_context(),
        word in arb_cased("itinerary"),
        a in arb_filler(),
        b in arb_filler(),
    ) {
        let reply = surround(&a, &word, &b);
        let expected = if prev == ContextState::Preferences {
            ContextState::ItinerarySuggestions
        } else {
            ContextState::General
        };
        prop_assert_eq!(update(prev, &reply), expected);
    }

    #[test]
    fn prop_no_keyword_is_general(prev in arb_context(), reply in arb_filler()) {
        prop_assert_eq!(update(prev, &reply), ContextState::General);
    }

    #[test]
    fn prop_history_grows_by_two_per_exchange(
        exchanges in proptest::collection::vec((".{0,20}", ".{0,20}"), 0..10),
    ) {
        let mut tracker = ContextTracker::new();
        for (user, assistant) in &exchanges {
            tracker.record_turn(Role::User, user.clone());
            tracker.record_turn(Role::Assistant, assistant.clone());
            tracker.apply(assistant);
        }

        prop_assert_eq!(tracker.history().len(), exchanges.len() * 2);
        for (i, (user, assistant)) in exchanges.iter().enumerate() {
            prop_assert_eq!(&tracker.history()[2 * i].content, user);
            prop_assert_eq!(tracker.history()[2 * i].role, Role::User);
            prop_assert_eq!(&tracker.history()[2 * i + 1].content, assistant);
            prop_assert_eq!(tracker.history()[2 * i + 1].role, Role::Assistant);
        }
        if !exchanges.is_empty() {
            prop_assert_ne!(tracker.current(), ContextState::Initial);
        }
    }
}
