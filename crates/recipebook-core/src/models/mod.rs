// ABOUTME: Core data models for recipes, pricing, inventory, and nutrition
// ABOUTME: Plain serde types exchanged between callers and the matching engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

/// Inventory items, units, and consumption plans
pub mod inventory;
/// Meal logs, goals, and daily summaries
pub mod nutrition;
/// Price tables and estimates
pub mod pricing;
/// Recipe records, ingredient sets, and match outputs
pub mod recipe;

pub use inventory::{
    ConsumeOutcome, ConsumedIngredient, ConsumptionPlan, ConsumptionWarning, DetailedIngredient,
    InventoryItem, LowStockItem, MissingIngredient, Unit,
};
pub use nutrition::{
    ActivityLevel, BmiCategory, DailySummary, DayTotals, MacroRemaining, MacroTotals, MealLog,
    NutritionFacts, NutritionGoals, NutritionProgress, NutritionTotals, Sex, WeeklySummary,
    WeightEntry, WeightReport, WeightStats, WeightTrend,
};
pub use pricing::{
    CategoryKeyword, Confidence, CostEstimate, GroceryCategory, MatchResult, PricedItem,
    ReferenceEntry, ShoppingItem,
};
pub use recipe::{
    IngredientList, MatchedRecipe, RecipeRecord, Recommendations, SimilarRecipe,
    SimilarityScore, UserIngredientSet,
};
