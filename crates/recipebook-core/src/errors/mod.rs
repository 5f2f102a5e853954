// ABOUTME: Unified error type for the fallible edges of the RecipeBook engine
// ABOUTME: Error codes, contextual details, and convenience constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! # Error Handling
//!
//! The matching engine itself never fails: malformed recipes degrade to empty
//! ingredient lists and unknown items fall back to default prices. Errors only
//! exist where the caller hands us something we cannot plan with (an unknown
//! unit, a negative weight) or where configuration and file input are read.

use std::error::Error as StdError;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::inventory::ALLOWED_UNITS;

/// Standard error codes for RecipeBook operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Unit string is not one of the supported measurement units
    #[serde(rename = "INVALID_UNIT")]
    InvalidUnit = 3001,
    /// Amount or multiplier is outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3002,
    /// Units of the inventory item and the requested amount disagree
    #[serde(rename = "UNIT_MISMATCH")]
    UnitMismatch = 3003,
    /// A record could not be interpreted (e.g. CLI input is not a JSON array)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3004,

    // Configuration (6000-6999)
    /// Configuration could not be loaded or failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal (9000-9999)
    /// File system failure while reading input
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON (de)serialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidUnit => "The measurement unit is not supported",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::UnitMismatch => "The measurement units do not match",
            Self::InvalidFormat => "The data format is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for RecipeBook operations
#[derive(Debug, Error)]
pub struct RecipeBookError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl RecipeBookError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Unknown measurement unit
    pub fn invalid_unit(unit: &str) -> Self {
        Self::new(
            ErrorCode::InvalidUnit,
            format!("Unit '{unit}' must be one of: {}", ALLOWED_UNITS.join(", ")),
        )
    }

    /// Value outside its accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Units of an inventory item and a request disagree
    pub fn unit_mismatch(name: &str, stored: &str, requested: &str) -> Self {
        Self::new(
            ErrorCode::UnitMismatch,
            format!("'{name}' is stored in '{stored}', but the request uses '{requested}'"),
        )
    }

    /// Input that cannot be interpreted
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for RecipeBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<io::Error> for RecipeBookError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for RecipeBookError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type RecipeBookResult<T> = Result<T, RecipeBookError>;
