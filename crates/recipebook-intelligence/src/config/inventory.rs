// ABOUTME: Inventory planning configuration
// ABOUTME: Configures the accepted range for recipe scale factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use recipebook_core::constants::inventory;
use serde::{Deserialize, Serialize};

/// Inventory planning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Largest servings multiplier accepted when planning consumption
    pub max_servings_multiplier: f64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            max_servings_multiplier: inventory::MAX_SERVINGS_MULTIPLIER,
        }
    }
}
