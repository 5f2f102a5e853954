// ABOUTME: Engine configuration for matching thresholds, pricing defaults, and inventory limits
// ABOUTME: Provides defaults, environment overrides, validation, and a process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `matching` - recommendation buckets and duplicate detection
//! - `pricing` - fallback price and currency symbol
//! - `inventory` - consumption planning limits
//!
//! Values come from compiled defaults, optionally overridden by `RECIPEBOOK_*`
//! environment variables. The `VALIDATED` parameter marks configurations that
//! have passed [`EngineConfig::validate`].

pub mod error;
pub mod inventory;
pub mod matching;
pub mod pricing;

pub use error::ConfigError;
pub use inventory::InventoryConfig;
pub use matching::MatchingConfig;
pub use pricing::PricingConfig;

use std::env::{self, VarError};
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig<true>> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig<const VALIDATED: bool = false> {
    /// Recommendation and duplicate-detection thresholds
    pub matching: MatchingConfig,
    /// Price estimation defaults
    pub pricing: PricingConfig,
    /// Inventory planning limits
    pub inventory: InventoryConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl EngineConfig<false> {
    /// Assemble a configuration that still has to be validated
    #[must_use]
    pub const fn unvalidated(
        matching: MatchingConfig,
        pricing: PricingConfig,
        inventory: InventoryConfig,
    ) -> Self {
        Self {
            matching,
            pricing,
            inventory,
            _phantom: PhantomData,
        }
    }

    /// Validate and promote to a checked configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid value
    pub fn validate(self) -> Result<EngineConfig<true>, ConfigError> {
        check(&self.matching, &self.pricing, &self.inventory)?;
        Ok(EngineConfig {
            matching: self.matching,
            pricing: self.pricing,
            inventory: self.inventory,
            _phantom: PhantomData,
        })
    }
}

impl EngineConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().into_unvalidated().apply_env_overrides()?;
        let config = config.validate()?;
        debug!(
            can_cook = config.matching.can_cook_percent,
            close_match = config.matching.close_match_percent,
            similarity = config.matching.similarity_threshold_percent,
            default_price = config.pricing.default_price,
            "Engine configuration loaded"
        );
        Ok(config)
    }

    /// Drop the validation marker, e.g. to adjust values before re-validating
    #[must_use]
    pub fn into_unvalidated(self) -> EngineConfig<false> {
        EngineConfig::unvalidated(self.matching, self.pricing, self.inventory)
    }
}

impl EngineConfig<false> {
    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(error) => Err(ConfigError::EnvVar(error)),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "RECIPEBOOK_CAN_COOK_PERCENT",
            &mut self.matching.can_cook_percent,
        )?;
        Self::apply_env_var(
            "RECIPEBOOK_CLOSE_MATCH_PERCENT",
            &mut self.matching.close_match_percent,
        )?;
        Self::apply_env_var(
            "RECIPEBOOK_SIMILARITY_THRESHOLD",
            &mut self.matching.similarity_threshold_percent,
        )?;
        Self::apply_env_var(
            "RECIPEBOOK_MAX_DUPLICATE_SUGGESTIONS",
            &mut self.matching.max_duplicate_suggestions,
        )?;
        Self::apply_env_var(
            "RECIPEBOOK_DEFAULT_PRICE",
            &mut self.pricing.default_price,
        )?;
        Self::apply_env_var(
            "RECIPEBOOK_CURRENCY_SYMBOL",
            &mut self.pricing.currency_symbol,
        )?;
        Self::apply_env_var(
            "RECIPEBOOK_MAX_SERVINGS_MULTIPLIER",
            &mut self.inventory.max_servings_multiplier,
        )?;

        Ok(self)
    }
}

impl Default for EngineConfig<true> {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            pricing: PricingConfig::default(),
            inventory: InventoryConfig::default(),
            _phantom: PhantomData,
        }
    }
}

fn check(
    matching: &MatchingConfig,
    pricing: &PricingConfig,
    inventory: &InventoryConfig,
) -> Result<(), ConfigError> {
    if matching.can_cook_percent > 100 || matching.close_match_percent > 100 {
        return Err(ConfigError::ValueOutOfRange(
            "Coverage thresholds must be between 0 and 100",
        ));
    }
    if matching.close_match_percent > matching.can_cook_percent {
        return Err(ConfigError::InvalidRange(
            "close_match_percent must be <= can_cook_percent",
        ));
    }
    if !(0.0..=100.0).contains(&matching.similarity_threshold_percent) {
        return Err(ConfigError::ValueOutOfRange(
            "similarity_threshold_percent must be between 0 and 100",
        ));
    }
    if matching.max_duplicate_suggestions == 0 {
        return Err(ConfigError::ValueOutOfRange(
            "max_duplicate_suggestions must be at least 1",
        ));
    }

    if !pricing.default_price.is_finite() || pricing.default_price < 0.0 {
        return Err(ConfigError::ValueOutOfRange(
            "default_price must be a non-negative number",
        ));
    }
    if pricing.currency_symbol.trim().is_empty() {
        return Err(ConfigError::MissingField("currency_symbol"));
    }

    if !inventory.max_servings_multiplier.is_finite() || inventory.max_servings_multiplier <= 0.0
    {
        return Err(ConfigError::ValueOutOfRange(
            "max_servings_multiplier must be positive",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_validate() {
        let config = EngineConfig::<true>::default().into_unvalidated();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_close_match_above_can_cook_is_rejected() {
        let mut config = EngineConfig::<true>::default().into_unvalidated();
        config.matching.close_match_percent = 90;
        config.matching.can_cook_percent = 85;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    #[serial]
    fn test_env_override_applies() {
        env::set_var("RECIPEBOOK_CLOSE_MATCH_PERCENT", "75");
        let loaded = EngineConfig::<true>::load();
        env::remove_var("RECIPEBOOK_CLOSE_MATCH_PERCENT");
        assert_eq!(loaded.unwrap().matching.close_match_percent, 75);
    }

    #[test]
    #[serial]
    fn test_unparseable_env_value_is_an_error() {
        env::set_var("RECIPEBOOK_DEFAULT_PRICE", "cheap");
        let loaded = EngineConfig::<true>::load();
        env::remove_var("RECIPEBOOK_DEFAULT_PRICE");
        assert!(matches!(loaded, Err(ConfigError::Parse(_))));
    }
}
