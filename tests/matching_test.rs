// ABOUTME: Tests for name normalization and the fuzzy ingredient matcher
// ABOUTME: Covers containment in both directions, head-word matching, and empty input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipebook::intelligence::matching::{fuzzy_matches, matches_any, normalize, normalize_value};
use serde_json::json;

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(normalize("  Cherry Tomatoes\t"), "cherry tomatoes");
    assert_eq!(normalize("OLIVE  OIL"), "olive  oil");
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = ["", " ", "Eggs", "  MiXeD Case  ", "tomatoes, diced", "Crème Fraîche"];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_non_string_values_are_coerced() {
    assert_eq!(normalize_value(&json!(7)), "7");
    assert_eq!(normalize_value(&json!(true)), "true");
    assert_eq!(normalize_value(&json!("  Salt ")), "salt");
}

// ============================================================================
// Fuzzy matching
// ============================================================================

#[test]
fn test_exact_and_case_insensitive() {
    assert!(fuzzy_matches("eggs", "eggs"));
    assert!(fuzzy_matches("EGGS ", " eggs"));
}

#[test]
fn test_substring_either_direction() {
    assert!(fuzzy_matches("tomato", "tomatoes"));
    assert!(fuzzy_matches("tomato", "cherry tomato"));
    assert!(fuzzy_matches("cherry tomato", "tomato"));
}

#[test]
fn test_first_token_of_second_argument() {
    // "chicken" is the head word of "chicken thighs, boneless"
    assert!(fuzzy_matches("roast chicken", "chicken thighs, boneless"));
    // the rule is one-directional: the head word of `a` is not consulted
    assert!(!fuzzy_matches("beef", "ground pork"));
}

#[test]
fn test_empty_input_never_matches() {
    assert!(!fuzzy_matches("", "anything"));
    assert!(!fuzzy_matches("anything", ""));
    assert!(!fuzzy_matches("", ""));
    assert!(!fuzzy_matches("  ", "salt"));
}

#[test]
fn test_unrelated_names_do_not_match() {
    assert!(!fuzzy_matches("basil", "oregano"));
    assert!(!fuzzy_matches("milk", "flour"));
}

#[test]
fn test_matches_any() {
    assert!(matches_any("Butter", ["salt", "unsalted butter"]));
    assert!(!matches_any("saffron", ["salt", "pepper"]));
    assert!(!matches_any("", ["salt"]));
}
