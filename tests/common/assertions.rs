//! Common assertion helpers for test output validation
//!
//! Provides predicates and assertion utilities for validating
//! problem-rotator command output, error messages, and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the missing-config error message
pub fn no_repository_configured() -> impl Predicate<str> {
    predicates::str::contains("No repository configured")
}

/// Creates a predicate that checks for an empty-cache hint
pub fn empty_cache_hint() -> impl Predicate<str> {
    predicates::str::contains("No cached problems")
        .or(predicates::str::contains("candidate pool is empty"))
}

/// Creates a predicate that checks for numbered history indices
pub fn has_history_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for a difficulty/topic badge pair
pub fn has_badges(difficulty: &str, topic: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", difficulty))
        .and(predicates::str::contains(format!("[{}]", topic)))
}
