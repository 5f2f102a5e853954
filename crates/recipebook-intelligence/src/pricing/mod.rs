// ABOUTME: Grocery price estimation against ordered reference and keyword tables
// ABOUTME: Exact, partial, keyword, then fallback passes with confidence tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Price Estimator
//!
//! Estimation runs four passes and the first hit wins:
//!
//! 1. exact key → `high`
//! 2. first key (in table order) contained in the name or containing it → `medium`
//! 3. first category keyword (in table order), priced at the category default → `low`
//! 4. global default price, category `other` → `low`

/// Built-in reference and keyword tables
pub mod tables;

use std::borrow::Cow;

use recipebook_core::constants::pricing::DEFAULT_QUANTITY;
use recipebook_core::models::{
    CategoryKeyword, Confidence, CostEstimate, GroceryCategory, MatchResult, MatchedRecipe,
    PricedItem, ReferenceEntry, ShoppingItem,
};
use tracing::{debug, trace};

use crate::config::PricingConfig;
use crate::matching::normalize;

pub use tables::{category_default_price, CATEGORY_KEYWORDS, REFERENCE_PRICES};

/// Price estimator over an ordered reference table
#[derive(Debug, Clone)]
pub struct PriceEstimator {
    reference: Cow<'static, [ReferenceEntry]>,
    keywords: Cow<'static, [CategoryKeyword]>,
    config: PricingConfig,
}

impl Default for PriceEstimator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PriceEstimator {
    /// Estimator over the built-in tables
    #[must_use]
    pub const fn new(config: PricingConfig) -> Self {
        Self {
            reference: Cow::Borrowed(REFERENCE_PRICES),
            keywords: Cow::Borrowed(CATEGORY_KEYWORDS),
            config,
        }
    }

    /// Estimator over caller-supplied tables
    ///
    /// Keys and keywords are normalized here; row order is kept as given and
    /// remains the priority order.
    #[must_use]
    pub fn with_tables(
        reference: Vec<ReferenceEntry>,
        keywords: Vec<CategoryKeyword>,
        config: PricingConfig,
    ) -> Self {
        let reference = reference
            .into_iter()
            .map(|entry| ReferenceEntry {
                key: Cow::Owned(normalize(&entry.key)),
                ..entry
            })
            .collect::<Vec<_>>();
        let keywords = keywords
            .into_iter()
            .map(|rule| CategoryKeyword {
                keyword: Cow::Owned(normalize(&rule.keyword)),
                ..rule
            })
            .collect::<Vec<_>>();

        Self {
            reference: Cow::Owned(reference),
            keywords: Cow::Owned(keywords),
            config,
        }
    }

    /// Pricing configuration in use
    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Estimate the unit price of one item
    #[must_use]
    pub fn estimate_price(&self, item_name: &str) -> MatchResult {
        let name = normalize(item_name);
        let result = |price: f64, confidence: Confidence, category: GroceryCategory| MatchResult {
            item: item_name.to_owned(),
            estimated_price: price,
            confidence,
            category,
        };

        if name.is_empty() {
            trace!("Empty item name, using fallback price");
            return result(
                self.config.default_price,
                Confidence::Low,
                GroceryCategory::Other,
            );
        }

        if let Some(entry) = self.reference.iter().find(|entry| entry.key == name) {
            trace!(item = %name, key = %entry.key, "Exact reference hit");
            return result(entry.price, Confidence::High, entry.category);
        }

        if let Some(entry) = self
            .reference
            .iter()
            .find(|entry| name.contains(entry.key.as_ref()) || entry.key.contains(name.as_str()))
        {
            trace!(item = %name, key = %entry.key, "Partial reference hit");
            return result(entry.price, Confidence::Medium, entry.category);
        }

        if let Some(rule) = self.keywords.iter().find(|rule| {
            name.contains(rule.keyword.as_ref()) || rule.keyword.contains(name.as_str())
        }) {
            trace!(item = %name, keyword = %rule.keyword, "Category keyword hit");
            return result(
                category_default_price(rule.category),
                Confidence::Low,
                rule.category,
            );
        }

        debug!(item = %name, "No price reference, using fallback");
        result(
            self.config.default_price,
            Confidence::Low,
            GroceryCategory::Other,
        )
    }

    /// Price a list of items; quantity defaults to one
    ///
    /// The total is left unrounded; rounding belongs to presentation.
    #[must_use]
    pub fn estimate_total_cost(&self, items: &[ShoppingItem]) -> CostEstimate {
        let breakdown: Vec<PricedItem> = items
            .iter()
            .map(|item| {
                let estimate = self.estimate_price(&item.name);
                let quantity = item.quantity.unwrap_or(DEFAULT_QUANTITY);
                let line_total = estimate.estimated_price * quantity;
                PricedItem {
                    estimate,
                    quantity,
                    line_total,
                }
            })
            .collect();
        let total = breakdown.iter().map(|line| line.line_total).sum();

        debug!(items = breakdown.len(), total, "Estimated shopping cost");
        CostEstimate { total, breakdown }
    }

    /// Cost of buying what a matched recipe is missing, one of each
    #[must_use]
    pub fn estimate_missing_cost(&self, matched: &MatchedRecipe) -> CostEstimate {
        let items: Vec<ShoppingItem> = matched
            .missing_ingredients
            .iter()
            .map(|name| ShoppingItem::new(name.clone(), None))
            .collect();
        self.estimate_total_cost(&items)
    }

    /// Currency symbol followed by the amount to two decimals
    #[must_use]
    pub fn format_price(&self, amount: f64) -> String {
        format!("{}{amount:.2}", self.config.currency_symbol)
    }
}

/// Display icon for a confidence tier
#[must_use]
pub const fn confidence_icon(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "🟢",
        Confidence::Medium => "🟡",
        Confidence::Low => "🔴",
    }
}
