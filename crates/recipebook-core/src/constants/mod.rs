// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Matching thresholds, pricing defaults, and nutrition coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Constants module
//!
//! Default values for the engine, grouped by domain. Anything a deployment may
//! want to tune is also exposed through `EngineConfig`; these are the defaults.

/// Recipe matching and recommendation thresholds
pub mod matching {
    /// Coverage required for the "can cook now" bucket
    pub const CAN_COOK_PERCENT: u8 = 100;

    /// Coverage required for the "close match" bucket
    pub const CLOSE_MATCH_PERCENT: u8 = 80;

    /// Similarity strictly above this marks a recipe as a possible duplicate
    pub const SIMILARITY_THRESHOLD_PERCENT: f64 = 20.0;

    /// Number of duplicate suggestions kept after ranking
    pub const MAX_DUPLICATE_SUGGESTIONS: usize = 5;
}

/// Grocery price estimation defaults
pub mod pricing {
    /// Price used when neither the reference table nor a category keyword matches
    pub const DEFAULT_ITEM_PRICE: f64 = 3.00;

    /// Currency symbol used by `format_price`
    pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

    /// Quantity assumed when a shopping item does not state one
    pub const DEFAULT_QUANTITY: f64 = 1.0;
}

/// Inventory planning limits
pub mod inventory {
    /// Largest recipe scale factor accepted by consumption planning
    pub const MAX_SERVINGS_MULTIPLIER: f64 = 10.0;

    /// Supported measurement units, in their canonical spelling
    pub const ALLOWED_UNITS: &[&str] = &[
        "kg", "g", "L", "ml", "oz", "lb", "cup", "tbsp", "tsp", "unit", "piece",
    ];
}

/// Nutrition formula coefficients (Mifflin-St Jeor and WHO BMI bands)
pub mod nutrition {
    /// BMR weight coefficient (per kg)
    pub const BMR_WEIGHT_COEF: f64 = 10.0;
    /// BMR height coefficient (per cm)
    pub const BMR_HEIGHT_COEF: f64 = 6.25;
    /// BMR age coefficient (per year)
    pub const BMR_AGE_COEF: f64 = 5.0;
    /// BMR constant for male
    pub const BMR_MALE_CONSTANT: f64 = 5.0;
    /// BMR constant for female
    pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

    /// Upper bound (exclusive) of the underweight band
    pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;
    /// Upper bound (exclusive) of the normal band
    pub const BMI_NORMAL_MAX: f64 = 25.0;
    /// Upper bound (exclusive) of the overweight band
    pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;

    /// Activity multipliers applied to BMR
    pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE_MULTIPLIER: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATELY_ACTIVE_MULTIPLIER: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE_MULTIPLIER: f64 = 1.725;
    /// Very hard exercise or a physical job
    pub const EXTREMELY_ACTIVE_MULTIPLIER: f64 = 1.9;

    /// Days in a weekly nutrition summary, end date included
    pub const WEEK_DAYS: u64 = 7;

    /// Most recent weight entries used for the current trend
    pub const WEIGHT_TREND_WINDOW: usize = 3;
}

/// Service identity used by logging
pub mod service_names {
    /// Name reported in structured startup logs
    pub const RECIPEBOOK_ENGINE: &str = "recipebook";
}
