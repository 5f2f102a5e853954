// ABOUTME: Recipe intelligence module for coverage, recommendations, and duplicate detection
// ABOUTME: Also hosts best-effort field extraction and external record ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! # Recipe Intelligence
//!
//! - [`matcher`]: per-recipe coverage and "can cook" / "close match" buckets
//! - [`similarity`]: overlap scoring for duplicate suggestions
//! - [`extraction`]: calories and times from loosely typed JSON
//! - [`record`]: `RecipeRecord` construction from external JSON

/// Calorie and time extraction
pub mod extraction;
/// Coverage scoring and recommendation buckets
pub mod matcher;
/// External record ingestion
pub mod record;
/// Duplicate-detection similarity
pub mod similarity;

pub use extraction::{
    extract_calories, extract_cook_time, extract_prep_time, extract_total_time, FieldRule,
};
pub use matcher::{find_recipes_with_ingredients, match_recipe, recommend};
pub use record::{record_from_value, records_from_value};
pub use similarity::{calculate_similarity, find_similar_recipes};
