// ABOUTME: Loads recipe corpora from JSON files for the command-line tools
// ABOUTME: Reads a JSON array of loosely shaped recipe objects into RecipeRecord values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use std::fs;
use std::path::Path;

use recipebook_core::models::RecipeRecord;
use recipebook_core::{RecipeBookError, RecipeBookResult};
use recipebook_intelligence::recipes::records_from_value;
use serde_json::Value;
use tracing::info;

/// Parse a recipe corpus from JSON text
///
/// # Errors
///
/// Returns `SerializationError` for invalid JSON and `InvalidFormat` when the
/// document is not an array of objects.
pub fn parse_recipes(json: &str) -> RecipeBookResult<Vec<RecipeRecord>> {
    let value: Value = serde_json::from_str(json)?;
    records_from_value(&value)
}

/// Read the raw JSON document of a corpus file
///
/// # Errors
///
/// Returns `StorageError` when the file cannot be read, `SerializationError`
/// for invalid JSON, and `InvalidFormat` when the document is not an array.
pub fn load_documents(path: &Path) -> RecipeBookResult<Vec<Value>> {
    let text = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Array(documents) => Ok(documents),
        _ => Err(RecipeBookError::invalid_format(format!(
            "{} must contain a JSON array of recipes",
            path.display()
        ))),
    }
}

/// Load a recipe corpus from a JSON file
///
/// # Errors
///
/// Returns any error from [`load_documents`], or `InvalidFormat` when an
/// element is not an object.
pub fn load_recipes(path: &Path) -> RecipeBookResult<Vec<RecipeRecord>> {
    let documents = load_documents(path)?;
    let recipes = records_from_value(&Value::Array(documents))?;
    info!(path = %path.display(), recipes = recipes.len(), "Loaded recipe corpus");
    Ok(recipes)
}
