// ABOUTME: Name normalization shared by every matching routine
// ABOUTME: Lowercase-and-trim canonical form plus head-word extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Canonical ingredient and item names.
//!
//! Every comparison in the engine runs on the output of [`normalize`]. Inner
//! whitespace is preserved so that [`first_token`] can still split head words.

/// Lowercase and trim a name. Idempotent.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// First whitespace-delimited token of an already normalized name
#[must_use]
pub fn first_token(normalized: &str) -> Option<&str> {
    normalized.split_whitespace().next()
}
