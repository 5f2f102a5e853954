// ABOUTME: Price estimation configuration for shopping list totals
// ABOUTME: Configures the global fallback price and the display currency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use recipebook_core::constants::pricing;
use serde::{Deserialize, Serialize};

/// Price estimation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price used when no table row or keyword matches
    pub default_price: f64,
    /// Symbol prefixed by `format_price`
    pub currency_symbol: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_price: pricing::DEFAULT_ITEM_PRICE,
            currency_symbol: pricing::DEFAULT_CURRENCY_SYMBOL.to_owned(),
        }
    }
}
