// ABOUTME: Inventory data models for pantry tracking and recipe consumption planning
// ABOUTME: Defines Unit, InventoryItem, low-stock reports, and consumption plan outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RecipeBookError;

/// Measurement unit accepted for inventory and detailed recipe ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    /// Kilograms
    Kilograms,
    /// Grams
    Grams,
    /// Liters
    Liters,
    /// Milliliters
    Milliliters,
    /// Ounces
    Ounces,
    /// Pounds
    Pounds,
    /// US cups
    Cups,
    /// Tablespoons
    Tablespoons,
    /// Teaspoons
    Teaspoons,
    /// Generic unit count
    Units,
    /// Whole pieces
    Pieces,
}

impl Unit {
    /// Canonical spelling
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Grams => "g",
            Self::Liters => "L",
            Self::Milliliters => "ml",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
            Self::Cups => "cup",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
            Self::Units => "unit",
            Self::Pieces => "piece",
        }
    }
}

impl FromStr for Unit {
    type Err = RecipeBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Self::Kilograms),
            "g" => Ok(Self::Grams),
            "l" => Ok(Self::Liters),
            "ml" => Ok(Self::Milliliters),
            "oz" => Ok(Self::Ounces),
            "lb" => Ok(Self::Pounds),
            "cup" => Ok(Self::Cups),
            "tbsp" => Ok(Self::Tablespoons),
            "tsp" => Ok(Self::Teaspoons),
            "unit" => Ok(Self::Units),
            "piece" => Ok(Self::Pieces),
            _ => Err(RecipeBookError::invalid_unit(s)),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = RecipeBookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_owned()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item in the household inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Item name
    pub name: String,
    /// Amount on hand
    pub amount: f64,
    /// Unit the amount is stored in
    pub unit: Unit,
    /// Warn when the amount falls to or below this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<f64>,
    /// Aisle category, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl InventoryItem {
    /// Item without a threshold or category
    pub fn new(name: impl Into<String>, amount: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
            low_stock_threshold: None,
            category: None,
        }
    }

    /// Set the low-stock threshold
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.low_stock_threshold = Some(threshold);
        self
    }
}

/// A recipe ingredient with a measured amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedIngredient {
    /// Ingredient name
    pub name: String,
    /// Amount needed for one batch
    pub amount: f64,
    /// Unit of `amount`
    pub unit: Unit,
}

impl DetailedIngredient {
    /// Create a detailed ingredient
    pub fn new(name: impl Into<String>, amount: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
        }
    }
}

/// An inventory item at or under its low-stock threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    /// Item name
    pub name: String,
    /// Amount on hand
    pub amount: f64,
    /// Unit of `amount`
    pub unit: Unit,
    /// Configured threshold
    pub low_stock_threshold: f64,
    /// `amount / threshold × 100`, zero for a zero threshold
    pub percent_remaining: f64,
    /// Aisle category, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Result of consuming a single ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeOutcome {
    /// Amount before consumption
    pub previous_amount: f64,
    /// Amount requested
    pub consumed_amount: f64,
    /// Amount left, never negative
    pub remaining_amount: f64,
    /// The item was used up and should be removed
    pub removed: bool,
    /// Threshold crossed, when one is set and the item remains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<f64>,
}

impl ConsumeOutcome {
    /// Whether the remaining amount is at or under the threshold
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.low_stock_threshold.is_some()
    }
}

/// One ingredient that would be drawn from inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumedIngredient {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Amount that would be consumed
    pub consumed: f64,
    /// Unit of the amounts
    pub unit: Unit,
    /// Amount left afterwards
    pub remaining: f64,
    /// The item would be used up
    pub removed: bool,
}

/// A recipe ingredient that is not in the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingIngredient {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Amount the recipe needs after scaling
    pub needed: f64,
    /// Unit of `needed`
    pub unit: Unit,
}

/// Problems noticed while planning consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsumptionWarning {
    /// Ingredient not found in inventory
    Missing {
        /// Ingredient name
        name: String,
        /// Amount needed
        needed: f64,
        /// Unit of `needed`
        unit: Unit,
    },
    /// Inventory stores the ingredient in another unit; nothing consumed
    UnitMismatch {
        /// Ingredient name
        name: String,
        /// Unit the recipe asks for
        needed_unit: Unit,
        /// Unit the inventory uses
        stored_unit: Unit,
    },
    /// Less on hand than needed; everything on hand is consumed
    Insufficient {
        /// Ingredient name
        name: String,
        /// Amount needed
        needed: f64,
        /// Amount on hand
        available: f64,
        /// Unit of the amounts
        unit: Unit,
    },
    /// Ingredient used up completely
    Removed {
        /// Ingredient name
        name: String,
    },
    /// Ingredient at or under its threshold afterwards
    LowStock {
        /// Ingredient name
        name: String,
        /// Amount left
        remaining: f64,
        /// Configured threshold
        threshold: f64,
        /// Unit of the amounts
        unit: Unit,
    },
}

impl fmt::Display for ConsumptionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name, needed, unit } => {
                write!(f, "Missing: {name} ({needed}{unit} needed)")
            }
            Self::UnitMismatch {
                name,
                needed_unit,
                stored_unit,
            } => write!(
                f,
                "Unit mismatch: {name} needs {needed_unit} but inventory has {stored_unit}"
            ),
            Self::Insufficient {
                name,
                needed,
                available,
                unit,
            } => write!(
                f,
                "Insufficient: {name} (need {needed}{unit}, have {available}{unit})"
            ),
            Self::Removed { name } => write!(f, "Removed: {name} (used up completely)"),
            Self::LowStock {
                name,
                remaining,
                threshold,
                unit,
            } => write!(
                f,
                "Low stock: {name} ({remaining}{unit} remaining, threshold: {threshold}{unit})"
            ),
        }
    }
}

/// What cooking a recipe would do to the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionPlan {
    /// Ingredients that would be drawn down
    pub consumed: Vec<ConsumedIngredient>,
    /// Items at or under their threshold afterwards
    pub low_stock: Vec<LowStockItem>,
    /// Names of items that would be used up
    pub removed: Vec<String>,
    /// Ingredients not found in inventory
    pub missing: Vec<MissingIngredient>,
    /// Every warning, in processing order
    pub warnings: Vec<ConsumptionWarning>,
}

impl ConsumptionPlan {
    /// Whether anything at all could be consumed
    #[must_use]
    pub fn consumed_anything(&self) -> bool {
        !self.consumed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing_is_case_insensitive() {
        assert_eq!("KG".parse::<Unit>().unwrap(), Unit::Kilograms);
        assert_eq!("l".parse::<Unit>().unwrap(), Unit::Liters);
        assert_eq!(Unit::Liters.to_string(), "L");
        assert!("bushel".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_serde_uses_canonical_spelling() {
        let json = serde_json::to_string(&Unit::Tablespoons).unwrap();
        assert_eq!(json, "\"tbsp\"");
        let parsed: Unit = serde_json::from_str("\"Piece\"").unwrap();
        assert_eq!(parsed, Unit::Pieces);
        assert!(serde_json::from_str::<Unit>("\"handful\"").is_err());
    }
}
