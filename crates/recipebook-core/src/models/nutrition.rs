// ABOUTME: Nutrition tracking data models for meal logs and daily goals
// ABOUTME: Defines meal logs, daily and weekly summaries, and weight tracking statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::nutrition::{
    EXTREMELY_ACTIVE_MULTIPLIER, LIGHTLY_ACTIVE_MULTIPLIER, MODERATELY_ACTIVE_MULTIPLIER,
    SEDENTARY_MULTIPLIER, VERY_ACTIVE_MULTIPLIER,
};

/// Sex used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

impl Sex {
    /// Parse a sex string; anything other than "male" uses the female constant
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// Physical activity level for TDEE estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or a physical job
    ExtremelyActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => SEDENTARY_MULTIPLIER,
            Self::LightlyActive => LIGHTLY_ACTIVE_MULTIPLIER,
            Self::ModeratelyActive => MODERATELY_ACTIVE_MULTIPLIER,
            Self::VeryActive => VERY_ACTIVE_MULTIPLIER,
            Self::ExtremelyActive => EXTREMELY_ACTIVE_MULTIPLIER,
        }
    }

    /// Parse an activity level; unknown values are sedentary
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "lightly_active" => Self::LightlyActive,
            "moderately_active" => Self::ModeratelyActive,
            "very_active" => Self::VeryActive,
            "extremely_active" => Self::ExtremelyActive,
            _ => Self::Sedentary,
        }
    }
}

/// Standard BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI under 18.5
    Underweight,
    /// 18.5 up to 25
    NormalWeight,
    /// 25 up to 30
    Overweight,
    /// 30 and over
    Obese,
}

impl BmiCategory {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Nutrients recorded for one meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionFacts {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Sugar (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// Sodium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

/// A logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealLog {
    /// What was eaten
    pub name: String,
    /// Day the meal belongs to
    pub date: NaiveDate,
    /// Nutrients of the meal
    pub nutrition: NutritionFacts,
}

/// Daily nutrition targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoals {
    /// Target energy (kcal)
    pub daily_calories: f64,
    /// Target protein (g)
    pub daily_protein: f64,
    /// Target carbohydrates (g)
    pub daily_carbs: f64,
    /// Target fat (g)
    pub daily_fat: f64,
    /// Target fiber (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_fiber: Option<f64>,
    /// Sugar limit (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_sugar: Option<f64>,
    /// Sodium limit (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_sodium: Option<f64>,
}

/// Summed nutrients over a day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Sugar (g)
    pub sugar: f64,
    /// Sodium (mg)
    pub sodium: f64,
}

/// Goal minus total for the macros
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MacroRemaining {
    /// Energy left (kcal), negative when over
    pub calories: f64,
    /// Protein left (g)
    pub protein: f64,
    /// Carbohydrates left (g)
    pub carbs: f64,
    /// Fat left (g)
    pub fat: f64,
}

/// Progress toward daily goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProgress {
    /// Share of the calorie goal eaten
    pub calories_percent: f64,
    /// Share of the protein goal eaten
    pub protein_percent: f64,
    /// Share of the carb goal eaten
    pub carbs_percent: f64,
    /// Share of the fat goal eaten
    pub fat_percent: f64,
    /// What is left of each macro goal
    pub remaining: MacroRemaining,
}

/// One day of nutrition, optionally compared against goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// Day summarized
    pub date: NaiveDate,
    /// Summed nutrients
    pub totals: NutritionTotals,
    /// Number of meals on that day
    pub meal_count: usize,
    /// Goals used for progress, when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<NutritionGoals>,
    /// Progress toward goals, when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<NutritionProgress>,
}

/// Calories and macros over some period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// One day inside a weekly summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotals {
    /// Day
    pub date: NaiveDate,
    /// Summed calories and macros
    #[serde(flatten)]
    pub totals: MacroTotals,
    /// Meals logged that day
    pub meal_count: usize,
}

/// Seven days of nutrition ending on `week_end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    /// First day of the window
    pub week_start: NaiveDate,
    /// Last day of the window, inclusive
    pub week_end: NaiveDate,
    /// Every day of the window in order, empty days included
    pub daily_summaries: Vec<DayTotals>,
    /// Weekly totals divided by seven
    pub weekly_averages: MacroTotals,
    /// Sums over the window
    pub weekly_totals: MacroTotals,
}

/// A logged body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Day of the measurement
    pub date: NaiveDate,
    /// Body weight
    pub weight: f64,
}

/// Direction of the most recent weight entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrend {
    /// Latest of the last three entries is higher
    Gaining,
    /// Latest of the last three entries is lower
    Losing,
    /// No change across the last three entries
    Stable,
    /// Fewer than three entries
    InsufficientData,
}

/// Weight tracking statistics over all entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightStats {
    /// Earliest weight
    pub first_weight: f64,
    /// Latest weight
    pub current_weight: f64,
    /// Latest minus earliest, rounded to 2 decimals
    pub total_change: f64,
    /// Change relative to the first weight, rounded to 2 decimals
    pub total_change_percent: f64,
    /// Calendar months between first and last entry, at least 1
    pub months_tracked: u32,
    /// `total_change / months_tracked`, rounded to 2 decimals
    pub average_monthly_change: f64,
    /// Highest weight logged
    pub highest_weight: f64,
    /// Lowest weight logged
    pub lowest_weight: f64,
    /// Trend over the last three entries
    pub current_trend: WeightTrend,
    /// Number of entries
    pub entry_count: usize,
    /// Day of the earliest entry
    pub first_date: NaiveDate,
    /// Day of the latest entry
    pub last_date: NaiveDate,
}

/// Weight statistics, or why there are none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeightReport {
    /// Fewer than two entries
    #[serde(rename_all = "camelCase")]
    NotEnoughData {
        /// Entries available
        entry_count: usize,
    },
    /// Statistics over two or more entries
    Stats(WeightStats),
}
