// ABOUTME: Main library entry point for the RecipeBook ingredient matching engine
// ABOUTME: Re-exports the core models and engine, plus logging and corpus loading for tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

#![deny(unsafe_code)]

//! # RecipeBook
//!
//! Ingredient matching and estimation for a household recipe, shopping,
//! inventory, and nutrition app.
//!
//! ## Features
//!
//! - **Fuzzy matching**: permissive ingredient-name comparison
//! - **Price estimation**: ordered reference table with confidence tiers
//! - **Recommendations**: "can cook now" and "close match" buckets
//! - **Duplicate detection**: ingredient-overlap similarity
//! - **Inventory and nutrition**: consumption planning, BMR/BMI, meal summaries, weight stats
//!
//! ## Example Usage
//!
//! ```rust
//! use recipebook::{intelligence::recipes::match_recipe, models::RecipeRecord};
//! use recipebook::models::UserIngredientSet;
//!
//! let recipe = RecipeRecord::new("Pancakes", ["eggs", "flour", "sugar"]);
//! let have: UserIngredientSet = ["Eggs", "flour"].into_iter().collect();
//! let matched = match_recipe(&recipe, &have);
//! assert_eq!(matched.match_percentage, 67);
//! assert_eq!(matched.missing_ingredients, vec!["sugar"]);
//! ```

/// Recipe corpus loading from JSON files
pub mod corpus;

/// Structured logging setup for binaries
pub mod logging;

pub use recipebook_core::{constants, errors, models, names};
pub use recipebook_core::{ErrorCode, RecipeBookError, RecipeBookResult};

/// The matching and estimation engine
pub use recipebook_intelligence as intelligence;
