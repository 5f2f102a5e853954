// ABOUTME: Subcommand implementations for the RecipeBook CLI
// ABOUTME: Each command loads its inputs, calls the engine, and prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use std::path::Path;

use anyhow::Result;
use recipebook::corpus::{load_documents, load_recipes};
use recipebook::intelligence::recipes::{
    extract_calories, extract_total_time, find_similar_recipes, recommend as bucket_recipes,
};
use recipebook::intelligence::{confidence_icon, EngineConfig, PriceEstimator};
use recipebook::models::{MatchedRecipe, ShoppingItem, UserIngredientSet};
use serde_json::{json, Value};

/// Split `name:quantity`; a suffix that is not a number stays part of the name
fn parse_shopping_item(raw: &str) -> ShoppingItem {
    if let Some((name, quantity)) = raw.rsplit_once(':') {
        if let Ok(quantity) = quantity.trim().parse::<f64>() {
            return ShoppingItem::new(name.trim(), Some(quantity));
        }
    }
    ShoppingItem::new(raw.trim(), None)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn price(items: &[String], config: &EngineConfig<true>, as_json: bool) -> Result<()> {
    let estimator = PriceEstimator::new(config.pricing.clone());
    let items: Vec<ShoppingItem> = items.iter().map(|raw| parse_shopping_item(raw)).collect();
    let estimate = estimator.estimate_total_cost(&items);

    if as_json {
        return print_json(&serde_json::to_value(&estimate)?);
    }

    for line in &estimate.breakdown {
        println!(
            "{} {:<24} {:>3} x {:>8} = {:>8}  ({}, {})",
            confidence_icon(line.estimate.confidence),
            line.estimate.item,
            line.quantity,
            estimator.format_price(line.estimate.estimated_price),
            estimator.format_price(line.line_total),
            line.estimate.category,
            line.estimate.confidence,
        );
    }
    println!("Total: {}", estimator.format_price(estimate.total));
    Ok(())
}

fn print_bucket(title: &str, bucket: &[MatchedRecipe], estimator: Option<&PriceEstimator>) {
    println!("{title} ({})", bucket.len());
    for matched in bucket {
        println!("  {:>3}%  {}", matched.match_percentage, matched.recipe.name);
        if !matched.missing_ingredients.is_empty() {
            println!("        missing: {}", matched.missing_ingredients.join(", "));
        }
        if let Some(estimator) = estimator {
            let cost = estimator.estimate_missing_cost(matched);
            println!("        to complete: ~{}", estimator.format_price(cost.total));
        }
    }
}

pub fn recommend(
    recipes: &Path,
    have: &[String],
    config: &EngineConfig<true>,
    as_json: bool,
) -> Result<()> {
    let corpus = load_recipes(recipes)?;
    let have: UserIngredientSet = have.iter().collect();
    let recommendations = bucket_recipes(&corpus, &have, &config.matching);

    if as_json {
        return print_json(&serde_json::to_value(&recommendations)?);
    }

    let estimator = PriceEstimator::new(config.pricing.clone());
    print_bucket("Can cook now", &recommendations.can_cook, None);
    print_bucket("Close match", &recommendations.close_match, Some(&estimator));
    Ok(())
}

pub fn similar(
    recipes: &Path,
    ingredients: &[String],
    config: &EngineConfig<true>,
    as_json: bool,
) -> Result<()> {
    let corpus = load_recipes(recipes)?;
    let suggestions = find_similar_recipes(ingredients, &corpus, &config.matching);

    if as_json {
        return print_json(&serde_json::to_value(&suggestions)?);
    }

    if suggestions.is_empty() {
        println!("No similar recipes found");
        return Ok(());
    }
    for suggestion in &suggestions {
        println!(
            "{:>5.1}%  {}  (shared: {})",
            suggestion.score.similarity,
            suggestion.recipe.name,
            suggestion.score.matched_ingredients.join(", ")
        );
    }
    Ok(())
}

pub fn extract(recipes: &Path, as_json: bool) -> Result<()> {
    let documents = load_documents(recipes)?;
    let rows: Vec<Value> = documents
        .iter()
        .map(|document| {
            let name = ["name", "title"]
                .iter()
                .find_map(|key| document.get(*key).and_then(Value::as_str))
                .unwrap_or("(unnamed)");
            json!({
                "name": name,
                "calories": extract_calories(document),
                "totalTime": extract_total_time(document),
            })
        })
        .collect();

    if as_json {
        return print_json(&Value::Array(rows));
    }

    let show = |value: &Value| value.as_f64().map_or_else(|| "-".to_owned(), |n| n.to_string());
    for row in &rows {
        println!(
            "{:<32} calories: {:>6}  total time: {:>5} min",
            row["name"].as_str().unwrap_or_default(),
            show(&row["calories"]),
            show(&row["totalTime"]),
        );
    }
    Ok(())
}
