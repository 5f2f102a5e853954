// ABOUTME: Shared test fixtures and setup helpers for integration tests
// ABOUTME: Provides quiet logging and a small household recipe corpus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipebook`

use std::env;
use std::sync::Once;

use recipebook::intelligence::recipes::records_from_value;
use recipebook::models::{RecipeRecord, UserIngredientSet};
use serde_json::json;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a user ingredient set from literals
pub fn have(items: &[&str]) -> UserIngredientSet {
    items.iter().collect()
}

/// Household corpus mixing every ingredient shape the app stores
pub fn household_corpus() -> Vec<RecipeRecord> {
    records_from_value(&json!([
        {
            "name": "Scrambled Eggs",
            "ingredients": ["eggs", "butter", "salt"],
            "prepTime": 2,
            "cookTime": 5
        },
        {
            "name": "Pancakes",
            "ingredients": ["eggs", "flour", "milk", "sugar", "butter"],
            "prep_time": "10 min",
            "cook_time": "PT15M",
            "calories": "350 kcal"
        },
        {
            "title": "Tomato Pasta",
            "ingredients": {"pasta": "200g", "tomatoes": "3", "garlic": "2 cloves", "olive oil": "1 tbsp"},
            "totalTime": "PT30M"
        },
        {
            "name": "Chicken Stir Fry",
            "ingredients": [
                {"name": "Chicken Breast", "amount": 0.5, "unit": "kg"},
                {"name": "Rice", "amount": 200, "unit": "g"},
                {"name": "Soy Sauce", "amount": 2, "unit": "tbsp"},
                {"name": "Bell Peppers", "amount": 2, "unit": "piece"}
            ],
            "nutritionInfo": {"calories": 520}
        },
        {
            "name": "Mystery Dish",
            "ingredients": "a bit of everything"
        }
    ]))
    .unwrap()
}
