// ABOUTME: Pantry inventory planning for low-stock reports and recipe consumption
// ABOUTME: Pure planning over caller-held inventory; nothing is mutated or persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Inventory Planning
//!
//! Inventory lookups are exact on the normalized name, unlike the fuzzy matcher
//! used for recipe coverage: consuming the wrong item is worse than reporting
//! it missing.

use recipebook_core::models::{
    ConsumeOutcome, ConsumedIngredient, ConsumptionPlan, ConsumptionWarning, DetailedIngredient,
    InventoryItem, LowStockItem, MissingIngredient, Unit,
};
use recipebook_core::{RecipeBookError, RecipeBookResult};
use tracing::{debug, warn};

use crate::config::InventoryConfig;
use crate::matching::normalize;

/// Threshold that actually triggers warnings; zero or unset never does
fn active_threshold(item: &InventoryItem) -> Option<f64> {
    item.low_stock_threshold.filter(|threshold| *threshold > 0.0)
}

fn low_stock_entry(item: &InventoryItem, amount: f64, threshold: f64) -> LowStockItem {
    LowStockItem {
        name: item.name.clone(),
        amount,
        unit: item.unit,
        low_stock_threshold: threshold,
        percent_remaining: amount / threshold * 100.0,
        category: item.category.clone(),
    }
}

/// Items at or under their low-stock threshold, in inventory order
#[must_use]
pub fn low_stock_items(inventory: &[InventoryItem]) -> Vec<LowStockItem> {
    inventory
        .iter()
        .filter_map(|item| {
            let threshold = active_threshold(item)?;
            (item.amount <= threshold).then(|| low_stock_entry(item, item.amount, threshold))
        })
        .collect()
}

/// Consume an amount of a single inventory item
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-positive amount and `UnitMismatch` when
/// `unit` differs from the item's unit.
pub fn consume(item: &InventoryItem, amount: f64, unit: Unit) -> RecipeBookResult<ConsumeOutcome> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(RecipeBookError::out_of_range(
            "Amount to consume must be greater than 0",
        ));
    }
    if item.unit != unit {
        return Err(RecipeBookError::unit_mismatch(
            &item.name,
            item.unit.as_str(),
            unit.as_str(),
        ));
    }

    let remaining = item.amount - amount;
    let removed = remaining <= 0.0;
    let low_stock_threshold = if removed {
        None
    } else {
        active_threshold(item).filter(|threshold| remaining <= *threshold)
    };

    debug!(item = %item.name, amount, remaining, removed, "Consumed inventory item");
    Ok(ConsumeOutcome {
        previous_amount: item.amount,
        consumed_amount: amount,
        remaining_amount: remaining.max(0.0),
        removed,
        low_stock_threshold,
    })
}

/// Plan what cooking a recipe would draw from the inventory
///
/// Ingredient amounts are scaled by `multiplier`. Repeated ingredients draw
/// from the same running stock, and an item used up along the way counts as
/// missing for the ingredients after it.
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the multiplier is not in
/// `(0, max_servings_multiplier]` or an ingredient amount is negative.
pub fn plan_recipe_consumption(
    ingredients: &[DetailedIngredient],
    multiplier: f64,
    inventory: &[InventoryItem],
    config: &InventoryConfig,
) -> RecipeBookResult<ConsumptionPlan> {
    if !multiplier.is_finite() || multiplier <= 0.0 || multiplier > config.max_servings_multiplier
    {
        return Err(RecipeBookError::out_of_range(format!(
            "Servings multiplier must be greater than 0 and at most {}",
            config.max_servings_multiplier
        )));
    }
    if let Some(bad) = ingredients
        .iter()
        .find(|ingredient| !ingredient.amount.is_finite() || ingredient.amount < 0.0)
    {
        return Err(RecipeBookError::out_of_range(format!(
            "Ingredient '{}' has an invalid amount",
            bad.name
        )));
    }

    let mut stock: Vec<f64> = inventory.iter().map(|item| item.amount).collect();
    let mut used_up = vec![false; inventory.len()];
    let mut plan = ConsumptionPlan::default();

    for ingredient in ingredients {
        let needed = ingredient.amount * multiplier;
        let key = normalize(&ingredient.name);
        // an item used up by an earlier ingredient is gone from the inventory
        let found = inventory
            .iter()
            .position(|item| normalize(&item.name) == key)
            .filter(|index| !used_up[*index]);
        let Some(index) = found else {
            plan.missing.push(MissingIngredient {
                name: ingredient.name.clone(),
                needed,
                unit: ingredient.unit,
            });
            plan.warnings.push(ConsumptionWarning::Missing {
                name: ingredient.name.clone(),
                needed,
                unit: ingredient.unit,
            });
            continue;
        };
        let item = &inventory[index];

        if item.unit != ingredient.unit {
            plan.warnings.push(ConsumptionWarning::UnitMismatch {
                name: ingredient.name.clone(),
                needed_unit: ingredient.unit,
                stored_unit: item.unit,
            });
            continue;
        }

        let available = stock[index];
        let consumed = if available < needed {
            plan.warnings.push(ConsumptionWarning::Insufficient {
                name: ingredient.name.clone(),
                needed,
                available,
                unit: ingredient.unit,
            });
            available.max(0.0)
        } else {
            needed
        };

        let remaining = available - consumed;
        stock[index] = remaining;
        let removed = remaining <= 0.0;

        if removed {
            used_up[index] = true;
            plan.removed.push(ingredient.name.clone());
            plan.warnings.push(ConsumptionWarning::Removed {
                name: ingredient.name.clone(),
            });
        } else if let Some(threshold) =
            active_threshold(item).filter(|threshold| remaining <= *threshold)
        {
            plan.low_stock.push(low_stock_entry(item, remaining, threshold));
            plan.warnings.push(ConsumptionWarning::LowStock {
                name: ingredient.name.clone(),
                remaining,
                threshold,
                unit: item.unit,
            });
        }

        plan.consumed.push(ConsumedIngredient {
            name: ingredient.name.clone(),
            consumed,
            unit: ingredient.unit,
            remaining: remaining.max(0.0),
            removed,
        });
    }

    if !plan.consumed_anything() && !ingredients.is_empty() {
        warn!(
            ingredients = ingredients.len(),
            "Nothing could be consumed from inventory"
        );
    }
    debug!(
        consumed = plan.consumed.len(),
        missing = plan.missing.len(),
        warnings = plan.warnings.len(),
        "Planned recipe consumption"
    );
    Ok(plan)
}
