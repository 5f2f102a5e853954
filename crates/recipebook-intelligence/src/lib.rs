// ABOUTME: Ingredient matching and estimation engine for the RecipeBook household app
// ABOUTME: Fuzzy matching, price estimation, recipe recommendation, inventory, and nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

#![deny(unsafe_code)]

//! # RecipeBook Intelligence
//!
//! Pure, synchronous algorithms over caller-supplied data. No function here
//! performs I/O or holds state between calls; the only process-wide value is
//! the lazily loaded [`config::EngineConfig`].
//!
//! - [`matching`]: normalization and the fuzzy name matcher
//! - [`pricing`]: reference-table price estimation
//! - [`recipes`]: coverage, recommendations, similarity, and field extraction
//! - [`inventory`]: low-stock reports and consumption planning
//! - [`nutrition`]: BMR, BMI, calorie targets, daily and weekly summaries, weight stats

/// Engine configuration with environment overrides
pub mod config;
/// Inventory planning
pub mod inventory;
/// Fuzzy ingredient-name matching
pub mod matching;
/// Nutrition helpers
pub mod nutrition;
/// Grocery price estimation
pub mod pricing;
/// Recipe matching, similarity, and extraction
pub mod recipes;

pub use config::{ConfigError, EngineConfig, InventoryConfig, MatchingConfig, PricingConfig};
pub use matching::{fuzzy_matches, normalize};
pub use pricing::{confidence_icon, PriceEstimator};
