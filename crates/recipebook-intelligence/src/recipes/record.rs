// ABOUTME: Builds RecipeRecord values from loosely shaped external recipe JSON
// ABOUTME: Accepts name/title, any ingredient shape, and camelCase or snake_case fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use recipebook_core::models::{IngredientList, RecipeRecord};
use recipebook_core::{RecipeBookError, RecipeBookResult};
use serde_json::Value;
use tracing::debug;

use super::extraction::{extract_calories, extract_cook_time, extract_prep_time};

/// Interpret one external recipe object
///
/// Never fails on missing or oddly typed fields; those are left empty.
///
/// # Errors
///
/// Returns `InvalidFormat` when the value is not a JSON object.
pub fn record_from_value(value: &Value) -> RecipeBookResult<RecipeRecord> {
    let Value::Object(fields) = value else {
        return Err(RecipeBookError::invalid_format(
            "recipe record must be a JSON object",
        ));
    };

    let name = ["name", "title"]
        .iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .trim()
        .to_owned();

    let ingredients = match fields.get("ingredients") {
        Some(Value::Array(entries)) => IngredientList::List(entries.clone()),
        Some(Value::Object(map)) => IngredientList::Map(map.clone()),
        Some(other) => {
            debug!(recipe = %name, "Unrecognized ingredient shape, treating as empty");
            IngredientList::Unrecognized(other.clone())
        }
        None => IngredientList::default(),
    };

    let servings = fields
        .get("servings")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok());

    let tags = fields
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    Ok(RecipeRecord {
        name,
        ingredients,
        prep_time: extract_prep_time(value),
        cook_time: extract_cook_time(value),
        servings,
        tags,
        calories: extract_calories(value),
    })
}

/// Interpret a JSON array of recipe objects
///
/// # Errors
///
/// Returns `InvalidFormat` when the value is not an array or an element is not
/// an object.
pub fn records_from_value(value: &Value) -> RecipeBookResult<Vec<RecipeRecord>> {
    let Value::Array(entries) = value else {
        return Err(RecipeBookError::invalid_format(
            "recipe corpus must be a JSON array",
        ));
    };
    entries.iter().map(record_from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_and_camel_case_fields() {
        let record = record_from_value(&json!({
            "title": "Omelette",
            "ingredients": {"Eggs": 3, "Milk": "50ml"},
            "prepTime": "PT5M",
            "cook_time": 10,
            "servings": 2,
            "nutrition": {"calories": 310}
        }))
        .unwrap();

        assert_eq!(record.name, "Omelette");
        assert_eq!(record.ingredient_names(), vec!["eggs", "milk"]);
        assert_eq!(record.total_time(), Some(15.0));
        assert_eq!(record.servings, Some(2));
        assert_eq!(record.calories, Some(310.0));
    }

    #[test]
    fn test_odd_ingredient_shape_is_empty() {
        let record = record_from_value(&json!({"name": "Mystery", "ingredients": 7})).unwrap();
        assert!(record.ingredients.is_empty());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(record_from_value(&json!("pancakes")).is_err());
        assert!(records_from_value(&json!({"name": "x"})).is_err());
    }
}
