// ABOUTME: Tests for calorie and time extraction from loosely typed recipe records
// ABOUTME: Field priority, fall-through on unparseable values, and record ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipebook::intelligence::recipes::{
    extract_calories, extract_cook_time, extract_prep_time, extract_total_time, record_from_value,
};
use recipebook::ErrorCode;
use serde_json::json;

mod common;

// ============================================================================
// Calories
// ============================================================================

#[test]
fn test_calorie_field_priority() {
    let record = json!({"cal": 100, "calories": 250, "energy": 900});
    assert_eq!(extract_calories(&record), Some(250.0));
}

#[test]
fn test_calorie_shapes() {
    assert_eq!(extract_calories(&json!({"calorie": "about 480kcal"})), Some(480.0));
    assert_eq!(extract_calories(&json!({"energy": 12.5})), Some(12.5));
    assert_eq!(
        extract_calories(&json!({"nutrition": {"calories": "610 kcal"}})),
        Some(610.0)
    );
}

#[test]
fn test_null_is_skipped_but_garbage_decides() {
    let record = json!({"calories": null, "calorie": "n/a", "cal": [1, 2], "energy": "75"});
    assert_eq!(extract_calories(&record), None);

    let record = json!({"calories": null, "energy": "75"});
    assert_eq!(extract_calories(&record), Some(75.0));

    let record = json!({"calories": "unknown", "energy": 210});
    assert_eq!(extract_calories(&record), None);
}

#[test]
fn test_only_ascii_digits_are_read() {
    let record = json!({"calories": "\u{661}\u{662} 450 kcal"});
    assert_eq!(extract_calories(&record), Some(450.0));
}

#[test]
fn test_absent_calories_are_none() {
    assert_eq!(extract_calories(&json!({"name": "Water"})), None);
    assert_eq!(extract_calories(&json!({"calories": "plenty"})), None);
}

// ============================================================================
// Times
// ============================================================================

#[test]
fn test_direct_total_wins_over_components() {
    let record = json!({"time": "40 minutes", "prepTime": 5, "cookTime": 10});
    assert_eq!(extract_total_time(&record), Some(40.0));
}

#[test]
fn test_unparseable_total_does_not_fall_back_to_components() {
    let record = json!({"totalTime": "quick", "prepTime": 10});
    assert_eq!(extract_total_time(&record), None);

    let record = json!({"totalTime": null, "prepTime": 10});
    assert_eq!(extract_total_time(&record), Some(10.0));
}

#[test]
fn test_total_is_sum_of_prep_and_cook() {
    let record = json!({"prep_time": "PT15M", "cookTime": "PT1H"});
    assert_eq!(extract_prep_time(&record), Some(15.0));
    assert_eq!(extract_cook_time(&record), Some(60.0));
    assert_eq!(extract_total_time(&record), Some(75.0));
}

#[test]
fn test_single_component_is_the_total() {
    assert_eq!(extract_total_time(&json!({"prepTime": 12})), Some(12.0));
    assert_eq!(extract_total_time(&json!({})), None);
}

#[test]
fn test_iso_duration_with_hours_and_minutes() {
    assert_eq!(extract_total_time(&json!({"totalTime": "PT1H30M"})), Some(90.0));
}

// ============================================================================
// Record ingestion
// ============================================================================

#[test]
fn test_household_corpus_fields() {
    let corpus = common::household_corpus();

    assert_eq!(corpus[0].total_time(), Some(7.0));
    assert_eq!(corpus[1].total_time(), Some(25.0));
    assert_eq!(corpus[1].calories, Some(350.0));
    assert_eq!(corpus[2].name, "Tomato Pasta");
    assert_eq!(corpus[3].calories, Some(520.0));
    assert_eq!(
        corpus[3].ingredient_names(),
        vec!["chicken breast", "rice", "soy sauce", "bell peppers"]
    );
    assert!(corpus[4].ingredient_names().is_empty());
}

#[test]
fn test_non_object_record_is_invalid_format() {
    let err = record_from_value(&json!(["eggs"])).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_missing_name_is_empty() {
    let record = record_from_value(&json!({"ingredients": ["salt"]})).unwrap();
    assert!(record.name.is_empty());
    assert_eq!(record.ingredient_names(), vec!["salt"]);
}
