// ABOUTME: Recipe coverage scoring and "can cook" / "close match" classification
// ABOUTME: Scores each recipe against the user's ingredients and buckets by threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use recipebook_core::models::{MatchedRecipe, RecipeRecord, Recommendations, UserIngredientSet};
use tracing::debug;

use crate::config::MatchingConfig;
use crate::matching::normalized_matches;

/// Score how much of a recipe the user's ingredients cover
///
/// A recipe ingredient counts as matched when any owned ingredient fuzzy-matches
/// it. A recipe without ingredients scores 0.
#[must_use]
pub fn match_recipe(recipe: &RecipeRecord, have: &UserIngredientSet) -> MatchedRecipe {
    let (matched, missing): (Vec<String>, Vec<String>) = recipe
        .ingredient_names()
        .into_iter()
        .partition(|ingredient| have.iter().any(|owned| normalized_matches(ingredient, owned)));

    let total = matched.len() + missing.len();
    let match_percentage = coverage_percent(matched.len(), total);

    MatchedRecipe {
        recipe: recipe.clone(),
        match_percentage,
        matched_ingredients: matched,
        missing_ingredients: missing,
    }
}

fn coverage_percent(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (matched as f64 / total as f64 * 100.0).round();
    // 100 is reserved for full coverage; rounding must not reach it
    let ceiling = if matched < total { 99.0 } else { 100.0 };
    percent.clamp(0.0, ceiling) as u8
}

/// Recipes covered at least `min_percent`, best first
///
/// Ties keep corpus order.
#[must_use]
pub fn find_recipes_with_ingredients(
    recipes: &[RecipeRecord],
    have: &UserIngredientSet,
    min_percent: u8,
) -> Vec<MatchedRecipe> {
    let mut results: Vec<MatchedRecipe> = recipes
        .iter()
        .map(|recipe| match_recipe(recipe, have))
        .filter(|matched| matched.match_percentage >= min_percent)
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    debug!(
        corpus = recipes.len(),
        kept = results.len(),
        min_percent,
        "Classified recipes by coverage"
    );
    results
}

/// Split a corpus into "can cook now" and "close match" buckets
///
/// `close_match` excludes every recipe already in `can_cook`.
#[must_use]
pub fn recommend(
    recipes: &[RecipeRecord],
    have: &UserIngredientSet,
    config: &MatchingConfig,
) -> Recommendations {
    let can_cook = find_recipes_with_ingredients(recipes, have, config.can_cook_percent);
    let close_match = find_recipes_with_ingredients(recipes, have, config.close_match_percent)
        .into_iter()
        .filter(|matched| matched.match_percentage < config.can_cook_percent)
        .collect::<Vec<_>>();

    debug!(
        can_cook = can_cook.len(),
        close_match = close_match.len(),
        "Built recipe recommendations"
    );
    Recommendations {
        can_cook,
        close_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_of_three_rounds_to_67() {
        let recipe = RecipeRecord::new("Pancakes", ["eggs", "flour", "sugar"]);
        let have: UserIngredientSet = ["eggs", "flour"].into_iter().collect();
        let matched = match_recipe(&recipe, &have);
        assert_eq!(matched.match_percentage, 67);
        assert_eq!(matched.missing_ingredients, vec!["sugar"]);
        assert_eq!(matched.matched_ingredients, vec!["eggs", "flour"]);
    }

    #[test]
    fn test_empty_recipe_scores_zero() {
        let recipe = RecipeRecord::new("Air", Vec::<String>::new());
        let have: UserIngredientSet = ["eggs"].into_iter().collect();
        assert_eq!(match_recipe(&recipe, &have).match_percentage, 0);
    }

    #[test]
    fn test_coverage_percent_bounds() {
        assert_eq!(coverage_percent(0, 0), 0);
        assert_eq!(coverage_percent(1, 3), 33);
        assert_eq!(coverage_percent(3, 3), 100);
    }
}
