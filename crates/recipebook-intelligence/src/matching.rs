// ABOUTME: Fuzzy ingredient-name matching shared by pricing, coverage, and similarity
// ABOUTME: Containment in either direction plus head-word containment, empty never matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Ingredient Name Matcher
//!
//! The matcher is deliberately permissive: `"tomato"` matches `"cherry
//! tomatoes"` and `"tomatoes, diced"`. It trades precision for recall because
//! users type ingredients loosely and recipes list them verbosely.

use serde_json::Value;

pub use recipebook_core::names::{first_token, normalize};

/// Decide whether two names refer to the same ingredient
///
/// After normalizing both, `a` matches `b` when they are equal, either contains
/// the other, or `a` contains the first token of `b`. An empty name on either
/// side never matches.
#[must_use]
pub fn fuzzy_matches(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    normalized_matches(&a, &b)
}

/// [`fuzzy_matches`] for inputs that are already normalized
#[must_use]
pub fn normalized_matches(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    a == b
        || b.contains(a)
        || a.contains(b)
        || first_token(b).is_some_and(|head| a.contains(head))
}

/// Whether `name` fuzzy-matches any of `candidates`
pub fn matches_any<'a, I>(name: &str, candidates: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let name = normalize(name);
    candidates
        .into_iter()
        .any(|candidate| normalized_matches(&name, &normalize(candidate)))
}

/// Normalize a loosely typed JSON value through its string form
///
/// Strings are used as-is, numbers and booleans via their display form, and
/// `null` becomes the empty name.
#[must_use]
pub fn normalize_value(value: &Value) -> String {
    match value {
        Value::String(s) => normalize(s),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => normalize(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_substring_both_directions() {
        assert!(fuzzy_matches("tomato", "tomatoes"));
        assert!(fuzzy_matches("tomato", "cherry tomato"));
        assert!(fuzzy_matches("Cherry Tomatoes", "tomatoes"));
    }

    #[test]
    fn test_head_word_rule() {
        // "tomatoes, diced" → head word "tomatoes,"
        assert!(fuzzy_matches("canned tomatoes, whole", "tomatoes, diced"));
        assert!(!fuzzy_matches("basil", "tomatoes, diced"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!fuzzy_matches("", "anything"));
        assert!(!fuzzy_matches("anything", ""));
        assert!(!fuzzy_matches("   ", "   "));
    }

    #[test]
    fn test_normalize_value_coerces() {
        assert_eq!(normalize_value(&json!(" Eggs ")), "eggs");
        assert_eq!(normalize_value(&json!(42)), "42");
        assert_eq!(normalize_value(&Value::Null), "");
        assert!(matches_any("EGGS", ["flour", "eggs"]));
    }
}
