// ABOUTME: Ingredient-overlap similarity used to suggest possible duplicate recipes
// ABOUTME: Scores candidates against the user's list and keeps the top matches above threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use recipebook_core::models::{RecipeRecord, SimilarRecipe, SimilarityScore};
use tracing::debug;

use crate::config::MatchingConfig;
use crate::matching::{normalize, normalized_matches};

/// Share of the user's ingredients found in a candidate list, 0-100
///
/// The user's list is the denominator. An empty user list scores 0.
#[must_use]
pub fn calculate_similarity<U, C>(
    user_ingredients: &[U],
    candidate_ingredients: &[C],
) -> SimilarityScore
where
    U: AsRef<str>,
    C: AsRef<str>,
{
    let user = normalized(user_ingredients);
    if user.is_empty() {
        return SimilarityScore::default();
    }
    let candidate = normalized(candidate_ingredients);

    let matched_ingredients: Vec<String> = user
        .iter()
        .filter(|mine| {
            candidate
                .iter()
                .any(|theirs| normalized_matches(mine, theirs))
        })
        .cloned()
        .collect();

    let similarity = matched_ingredients.len() as f64 / user.len() as f64 * 100.0;
    SimilarityScore {
        similarity,
        matched_ingredients,
    }
}

fn normalized<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|name| normalize(name.as_ref()))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Candidate recipes that look like duplicates of the user's ingredient list
///
/// Keeps recipes scoring strictly above the similarity threshold, most similar
/// first (ties keep corpus order), truncated to the configured maximum.
#[must_use]
pub fn find_similar_recipes<U: AsRef<str>>(
    user_ingredients: &[U],
    corpus: &[RecipeRecord],
    config: &MatchingConfig,
) -> Vec<SimilarRecipe> {
    let mut similar: Vec<SimilarRecipe> = corpus
        .iter()
        .filter_map(|recipe| {
            let names = recipe.ingredient_names();
            let score = calculate_similarity(user_ingredients, names.as_slice());
            (score.similarity > config.similarity_threshold_percent).then(|| SimilarRecipe {
                recipe: recipe.clone(),
                score,
            })
        })
        .collect();

    similar.sort_by(|a, b| b.score.similarity.total_cmp(&a.score.similarity));
    similar.truncate(config.max_duplicate_suggestions);

    debug!(
        corpus = corpus.len(),
        suggestions = similar.len(),
        threshold = config.similarity_threshold_percent,
        "Found similar recipes"
    );
    similar
}
