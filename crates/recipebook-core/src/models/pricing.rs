// ABOUTME: Price estimation data models for shopping lists
// ABOUTME: Defines GroceryCategory, Confidence, reference rules, and estimate outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grocery aisle category used by the price tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroceryCategory {
    /// Fresh vegetables and herbs
    Vegetables,
    /// Fresh fruit
    Fruits,
    /// Meat and poultry
    Meat,
    /// Fish and shellfish
    Seafood,
    /// Milk, cheese, eggs, and similar
    Dairy,
    /// Bread and baked goods
    Bakery,
    /// Rice, pasta, flour, and cereals
    Grains,
    /// Shelf-stable staples, spices, oils, and sauces
    Pantry,
    /// Drinks
    Beverages,
    /// Frozen foods
    Frozen,
    /// Snacks and sweets
    Snacks,
    /// Anything unrecognized
    #[default]
    Other,
}

impl GroceryCategory {
    /// Wire name of the category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Meat => "meat",
            Self::Seafood => "seafood",
            Self::Dairy => "dairy",
            Self::Bakery => "bakery",
            Self::Grains => "grains",
            Self::Pantry => "pantry",
            Self::Beverages => "beverages",
            Self::Frozen => "frozen",
            Self::Snacks => "snacks",
            Self::Other => "other",
        }
    }

    /// Parse a category name, falling back to `Other`
    #[must_use]
    pub fn from_str_or_default(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "vegetables" | "vegetable" | "produce" => Self::Vegetables,
            "fruits" | "fruit" => Self::Fruits,
            "meat" => Self::Meat,
            "seafood" | "fish" => Self::Seafood,
            "dairy" => Self::Dairy,
            "bakery" => Self::Bakery,
            "grains" => Self::Grains,
            "pantry" => Self::Pantry,
            "beverages" | "drinks" => Self::Beverages,
            "frozen" => Self::Frozen,
            "snacks" => Self::Snacks,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much to trust a price estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Exact reference-table hit
    High,
    /// Substring hit on a reference entry
    Medium,
    /// Category keyword guess or global fallback
    Low,
}

impl Confidence {
    /// Wire name of the tier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the reference price table
///
/// Keys are stored normalized. Tables are ordered; earlier rows win partial
/// matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Normalized item name
    pub key: Cow<'static, str>,
    /// Typical unit price
    pub price: f64,
    /// Aisle category
    pub category: GroceryCategory,
}

impl ReferenceEntry {
    /// Const constructor for static tables
    #[must_use]
    pub const fn new(key: &'static str, price: f64, category: GroceryCategory) -> Self {
        Self {
            key: Cow::Borrowed(key),
            price,
            category,
        }
    }
}

/// One row of the category keyword table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryKeyword {
    /// Normalized keyword looked for in item names
    pub keyword: Cow<'static, str>,
    /// Category implied by the keyword
    pub category: GroceryCategory,
}

impl CategoryKeyword {
    /// Const constructor for static tables
    #[must_use]
    pub const fn new(keyword: &'static str, category: GroceryCategory) -> Self {
        Self {
            keyword: Cow::Borrowed(keyword),
            category,
        }
    }
}

/// Price estimate for one item name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The item name as given
    pub item: String,
    /// Estimated unit price
    pub estimated_price: f64,
    /// Reliability of the estimate
    pub confidence: Confidence,
    /// Aisle category
    pub category: GroceryCategory,
}

/// A shopping-list line to price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Item name
    pub name: String,
    /// Quantity; one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl ShoppingItem {
    /// Item with an explicit quantity
    pub fn new(name: impl Into<String>, quantity: Option<f64>) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// One priced line of a cost estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedItem {
    /// Unit estimate for the item
    #[serde(flatten)]
    pub estimate: MatchResult,
    /// Quantity used for the line total
    pub quantity: f64,
    /// `estimated_price × quantity`
    pub line_total: f64,
}

/// Total estimated cost of a list of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CostEstimate {
    /// Unrounded sum of line totals
    pub total: f64,
    /// Per-item breakdown in input order
    pub breakdown: Vec<PricedItem>,
}
