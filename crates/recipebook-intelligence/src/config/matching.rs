// ABOUTME: Recipe matching configuration for recommendation buckets and duplicate detection
// ABOUTME: Configures coverage thresholds, similarity threshold, and suggestion limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Recipe Matching Configuration
//!
//! The defaults (100% / 80% coverage, similarity above 20%, five duplicate
//! suggestions) come from the household app and have not been tuned; they are
//! kept configurable so product can adjust them without code changes.

use recipebook_core::constants::matching;
use serde::{Deserialize, Serialize};

/// Recipe Matching Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum coverage for the "can cook now" bucket
    pub can_cook_percent: u8,
    /// Minimum coverage for the "close match" bucket
    pub close_match_percent: u8,
    /// Similarity strictly above this is a duplicate suggestion
    pub similarity_threshold_percent: f64,
    /// Maximum duplicate suggestions returned
    pub max_duplicate_suggestions: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            can_cook_percent: matching::CAN_COOK_PERCENT,
            close_match_percent: matching::CLOSE_MATCH_PERCENT,
            similarity_threshold_percent: matching::SIMILARITY_THRESHOLD_PERCENT,
            max_duplicate_suggestions: matching::MAX_DUPLICATE_SUGGESTIONS,
        }
    }
}
