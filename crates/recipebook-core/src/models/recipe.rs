// ABOUTME: Recipe data models shared between ingestion and matching
// ABOUTME: Defines RecipeRecord, IngredientList, UserIngredientSet, and match outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::names::normalize;

/// Ingredients exactly as they arrive from an external record
///
/// Personal recipes carry a list of strings (`"2kg chicken"`), detailed
/// recipes a list of `{name, amount, unit}` objects, and some community
/// sources a name→amount map. Anything else is kept but treated as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientList {
    /// Sequence of strings or `{name, ...}` objects
    List(Vec<Value>),
    /// Ingredient name → amount
    Map(Map<String, Value>),
    /// Any other JSON shape
    Unrecognized(Value),
}

impl Default for IngredientList {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl IngredientList {
    /// Build a list form from plain names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(
            names
                .into_iter()
                .map(|name| Value::String(name.into()))
                .collect(),
        )
    }

    /// Canonical form: normalized names in original order
    ///
    /// Blank names are dropped. Numbers and booleans are read through their
    /// string form; nulls, nested arrays, and objects without a string `name`
    /// are skipped.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let raw: Vec<String> = match self {
            Self::List(entries) => entries.iter().filter_map(entry_name).collect(),
            Self::Map(map) => map.keys().cloned().collect(),
            Self::Unrecognized(_) => Vec::new(),
        };

        raw.iter()
            .map(|name| normalize(name))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Whether the list yields no usable ingredient names
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

fn entry_name(entry: &Value) -> Option<String> {
    match entry {
        Value::String(name) => Some(name.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Object(fields) => fields
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned),
        Value::Null | Value::Array(_) => None,
    }
}

/// A recipe as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecipeRecord {
    /// Display name
    pub name: String,
    /// Ingredients in whatever shape the source used
    #[serde(default)]
    pub ingredients: IngredientList,
    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<f64>,
    /// Cooking time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<f64>,
    /// Number of servings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Calories per serving, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

impl RecipeRecord {
    /// Create a recipe from a name and plain ingredient names
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: IngredientList::from_names(ingredients),
            ..Self::default()
        }
    }

    /// Normalized ingredient names in original order
    #[must_use]
    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients.names()
    }

    /// Prep plus cook time when both are known, otherwise whichever is
    #[must_use]
    pub fn total_time(&self) -> Option<f64> {
        match (self.prep_time, self.cook_time) {
            (Some(prep), Some(cook)) => Some(prep + cook),
            (prep, cook) => prep.or(cook),
        }
    }
}

/// The set of ingredients a user currently has
///
/// Entries are normalized on insertion; duplicates and blank names are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct UserIngredientSet {
    items: Vec<String>,
}

impl UserIngredientSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert a name; returns `false` when it was blank or already present
    pub fn insert(&mut self, name: &str) -> bool {
        let normalized = normalize(name);
        if normalized.is_empty() || self.items.contains(&normalized) {
            return false;
        }
        self.items.push(normalized);
        true
    }

    /// Remove a name; returns `true` when it was present
    pub fn remove(&mut self, name: &str) -> bool {
        let normalized = normalize(name);
        let before = self.items.len();
        self.items.retain(|item| item != &normalized);
        self.items.len() != before
    }

    /// Case-insensitive exact membership
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains(&normalize(name))
    }

    /// Iterate normalized names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Number of distinct names
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Normalized names as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for UserIngredientSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for UserIngredientSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name.as_ref());
        }
    }
}

impl From<Vec<String>> for UserIngredientSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<UserIngredientSet> for Vec<String> {
    fn from(set: UserIngredientSet) -> Self {
        set.items
    }
}

/// Coverage of one recipe by a user's ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRecipe {
    /// The recipe that was scored
    pub recipe: RecipeRecord,
    /// Rounded share of matched ingredients, 0-100
    pub match_percentage: u8,
    /// Ingredients satisfied by the user's set, in recipe order
    pub matched_ingredients: Vec<String>,
    /// Ingredients with no match, in recipe order
    pub missing_ingredients: Vec<String>,
}

impl MatchedRecipe {
    /// Whether every ingredient is covered
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_ingredients.is_empty() && !self.matched_ingredients.is_empty()
    }
}

/// Overlap between a user's ingredient list and one candidate recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimilarityScore {
    /// Share of the user's ingredients found in the candidate, 0-100
    pub similarity: f64,
    /// User ingredients that matched, in the user's order
    pub matched_ingredients: Vec<String>,
}

/// A recipe suggested as a possible duplicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarRecipe {
    /// The candidate recipe
    pub recipe: RecipeRecord,
    /// Similarity score against the user's ingredients
    #[serde(flatten)]
    pub score: SimilarityScore,
}

/// Recipes bucketed by how ready the user is to cook them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Recommendations {
    /// Recipes meeting the "can cook now" threshold
    pub can_cook: Vec<MatchedRecipe>,
    /// Recipes meeting the "close match" threshold but not already in `can_cook`
    pub close_match: Vec<MatchedRecipe>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_and_map_forms_normalize_identically() {
        let list: IngredientList = serde_json::from_value(json!([" Eggs", "FLOUR "])).unwrap();
        let map: IngredientList =
            serde_json::from_value(json!({"Eggs": "2", "Flour": "1 cup"})).unwrap();
        assert_eq!(list.names(), vec!["eggs", "flour"]);
        assert_eq!(map.names(), vec!["eggs", "flour"]);
    }

    #[test]
    fn test_unrecognized_shape_is_empty() {
        let list: IngredientList = serde_json::from_value(json!("eggs, flour")).unwrap();
        assert!(matches!(list, IngredientList::Unrecognized(_)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_user_set_dedupes_case_insensitively() {
        let set: UserIngredientSet = ["Eggs", "eggs ", "", "Milk"].into_iter().collect();
        assert_eq!(set.as_slice(), &["eggs".to_owned(), "milk".to_owned()]);
        assert!(set.contains("MILK"));
    }
}
