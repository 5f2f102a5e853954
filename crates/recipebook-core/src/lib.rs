// ABOUTME: Core types and constants for the RecipeBook matching engine
// ABOUTME: Foundation crate with error handling, name normalization, models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

#![deny(unsafe_code)]

//! # RecipeBook Core
//!
//! Foundation crate providing shared types and constants for the RecipeBook
//! ingredient matching engine. It holds no algorithms beyond name
//! normalization, so it changes rarely and keeps workspace rebuilds cheap.
//!
//! ## Modules
//!
//! - **errors**: `RecipeBookError` and `ErrorCode` for the fallible edges
//! - **constants**: default thresholds, prices, and formula coefficients
//! - **names**: canonical lowercase/trimmed names
//! - **models**: recipe, pricing, inventory, and nutrition data types

/// Unified error handling with standard error codes
pub mod errors;

/// Default values organized by domain
pub mod constants;

/// Name normalization shared by all matchers
pub mod names;

/// Core data models
pub mod models;

pub use errors::{ErrorCode, RecipeBookError, RecipeBookResult};
