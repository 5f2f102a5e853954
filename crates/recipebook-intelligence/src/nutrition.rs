// ABOUTME: Nutrition helpers for BMR, BMI, calorie targets, meal summaries, and weight stats
// ABOUTME: Mifflin-St Jeor and WHO BMI bands; meal totals compared against daily goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Nutrition Module
//!
//! # References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//! - WHO body mass index classification for adults.

use chrono::{Datelike, Days, NaiveDate};
use recipebook_core::constants::nutrition::{
    BMI_NORMAL_MAX, BMI_OVERWEIGHT_MAX, BMI_UNDERWEIGHT_MAX, BMR_AGE_COEF, BMR_FEMALE_CONSTANT,
    BMR_HEIGHT_COEF, BMR_MALE_CONSTANT, BMR_WEIGHT_COEF, WEEK_DAYS, WEIGHT_TREND_WINDOW,
};
use recipebook_core::models::{
    ActivityLevel, BmiCategory, DailySummary, DayTotals, MacroRemaining, MacroTotals, MealLog,
    NutritionGoals, NutritionProgress, NutritionTotals, Sex, WeeklySummary, WeightEntry,
    WeightReport, WeightStats, WeightTrend,
};
use recipebook_core::{RecipeBookError, RecipeBookResult};
use tracing::debug;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn require_positive(value: f64, what: &str) -> RecipeBookResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RecipeBookError::out_of_range(format!(
            "{what} must be greater than 0"
        )))
    }
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor, rounded to 2 decimals
///
/// # Errors
///
/// Returns `ValueOutOfRange` for non-positive weight or height
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> RecipeBookResult<f64> {
    require_positive(weight_kg, "Weight")?;
    require_positive(height_cm, "Height")?;

    let sex_constant = match sex {
        Sex::Male => BMR_MALE_CONSTANT,
        Sex::Female => BMR_FEMALE_CONSTANT,
    };
    let bmr = BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * f64::from(age)
        + sex_constant;

    Ok(round2(bmr))
}

/// Body mass index, rounded to 2 decimals
///
/// # Errors
///
/// Returns `ValueOutOfRange` for non-positive weight or height
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> RecipeBookResult<f64> {
    require_positive(weight_kg, "Weight")?;
    require_positive(height_cm, "Height")?;

    let height_m = height_cm / 100.0;
    Ok(round2(weight_kg / (height_m * height_m)))
}

/// WHO band for a BMI value
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_MAX {
        BmiCategory::NormalWeight
    } else if bmi < BMI_OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Daily calorie target: BMR times the activity multiplier, rounded to 2 decimals
#[must_use]
pub fn daily_calorie_target(bmr: f64, level: ActivityLevel) -> f64 {
    round2(bmr * level.multiplier())
}

fn percent_of(value: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        round2(value / goal * 100.0)
    } else {
        0.0
    }
}

/// Totals for the meals logged on `date`, with progress when goals are set
#[must_use]
pub fn summarize_day(
    date: NaiveDate,
    meals: &[MealLog],
    goals: Option<&NutritionGoals>,
) -> DailySummary {
    let todays: Vec<&MealLog> = meals.iter().filter(|meal| meal.date == date).collect();

    let totals = todays
        .iter()
        .fold(NutritionTotals::default(), |mut acc, meal| {
            let facts = &meal.nutrition;
            acc.calories += facts.calories;
            acc.protein += facts.protein;
            acc.carbs += facts.carbs;
            acc.fat += facts.fat;
            acc.fiber += facts.fiber.unwrap_or_default();
            acc.sugar += facts.sugar.unwrap_or_default();
            acc.sodium += facts.sodium.unwrap_or_default();
            acc
        });

    let progress = goals.map(|goals| NutritionProgress {
        calories_percent: percent_of(totals.calories, goals.daily_calories),
        protein_percent: percent_of(totals.protein, goals.daily_protein),
        carbs_percent: percent_of(totals.carbs, goals.daily_carbs),
        fat_percent: percent_of(totals.fat, goals.daily_fat),
        remaining: MacroRemaining {
            calories: goals.daily_calories - totals.calories,
            protein: goals.daily_protein - totals.protein,
            carbs: goals.daily_carbs - totals.carbs,
            fat: goals.daily_fat - totals.fat,
        },
    });

    debug!(%date, meals = todays.len(), calories = totals.calories, "Summarized day");
    DailySummary {
        date,
        totals,
        meal_count: todays.len(),
        goals: goals.copied(),
        progress,
    }
}

fn add_macros(acc: &mut MacroTotals, meal: &MealLog) {
    acc.calories += meal.nutrition.calories;
    acc.protein += meal.nutrition.protein;
    acc.carbs += meal.nutrition.carbs;
    acc.fat += meal.nutrition.fat;
}

/// Seven days of totals ending on `end`, with per-day rows and daily averages
///
/// Days without meals appear with zero totals. Averages always divide by seven.
#[must_use]
pub fn summarize_week(end: NaiveDate, meals: &[MealLog]) -> WeeklySummary {
    let start = end
        .checked_sub_days(Days::new(WEEK_DAYS - 1))
        .unwrap_or(NaiveDate::MIN);

    let daily_summaries: Vec<DayTotals> = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            let mut totals = MacroTotals::default();
            let mut meal_count = 0;
            for meal in meals.iter().filter(|meal| meal.date == date) {
                add_macros(&mut totals, meal);
                meal_count += 1;
            }
            DayTotals {
                date,
                totals,
                meal_count,
            }
        })
        .collect();

    let weekly_totals =
        daily_summaries
            .iter()
            .fold(MacroTotals::default(), |mut acc, day| {
                acc.calories += day.totals.calories;
                acc.protein += day.totals.protein;
                acc.carbs += day.totals.carbs;
                acc.fat += day.totals.fat;
                acc
            });

    let days = WEEK_DAYS as f64;
    let weekly_averages = MacroTotals {
        calories: weekly_totals.calories / days,
        protein: weekly_totals.protein / days,
        carbs: weekly_totals.carbs / days,
        fat: weekly_totals.fat / days,
    };

    debug!(%start, %end, calories = weekly_totals.calories, "Summarized week");
    WeeklySummary {
        week_start: start,
        week_end: end,
        daily_summaries,
        weekly_averages,
        weekly_totals,
    }
}

fn months_between(first: NaiveDate, last: NaiveDate) -> u32 {
    let months = i64::from(last.year() - first.year()) * 12 + i64::from(last.month())
        - i64::from(first.month());
    u32::try_from(months).unwrap_or(0).max(1)
}

fn recent_trend(entries: &[WeightEntry]) -> WeightTrend {
    if entries.len() < WEIGHT_TREND_WINDOW {
        return WeightTrend::InsufficientData;
    }
    let window = &entries[entries.len() - WEIGHT_TREND_WINDOW..];
    let change = window[window.len() - 1].weight - window[0].weight;
    if change > 0.0 {
        WeightTrend::Gaining
    } else if change < 0.0 {
        WeightTrend::Losing
    } else {
        WeightTrend::Stable
    }
}

/// Weight tracking statistics, oldest entry first
///
/// Entries are ordered by date before anything is computed; entries on the
/// same day keep their given order. Fewer than two entries yields
/// [`WeightReport::NotEnoughData`].
///
/// # Errors
///
/// Returns `ValueOutOfRange` when a weight is not positive
pub fn weight_stats(entries: &[WeightEntry]) -> RecipeBookResult<WeightReport> {
    for entry in entries {
        require_positive(entry.weight, "Weight")?;
    }

    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| entry.date);

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Ok(WeightReport::NotEnoughData { entry_count: 0 });
    };
    if sorted.len() < 2 {
        return Ok(WeightReport::NotEnoughData {
            entry_count: sorted.len(),
        });
    }

    let total_change = last.weight - first.weight;
    let months_tracked = months_between(first.date, last.date);
    let highest_weight = sorted
        .iter()
        .map(|entry| entry.weight)
        .fold(f64::MIN, f64::max);
    let lowest_weight = sorted
        .iter()
        .map(|entry| entry.weight)
        .fold(f64::MAX, f64::min);

    Ok(WeightReport::Stats(WeightStats {
        first_weight: first.weight,
        current_weight: last.weight,
        total_change: round2(total_change),
        total_change_percent: round2(total_change / first.weight * 100.0),
        months_tracked,
        average_monthly_change: round2(total_change / f64::from(months_tracked)),
        highest_weight,
        lowest_weight,
        current_trend: recent_trend(&sorted),
        entry_count: sorted.len(),
        first_date: first.date,
        last_date: last.date,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_and_female() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        assert!((calculate_bmr(70.0, 175.0, 30, Sex::Male).unwrap() - 1648.75).abs() < 1e-9);
        assert!((calculate_bmr(70.0, 175.0, 30, Sex::Female).unwrap() - 1482.75).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(calculate_bmr(0.0, 175.0, 30, Sex::Male).is_err());
        assert!(calculate_bmi(70.0, -1.0).is_err());
    }

    #[test]
    fn test_bmi_band_edges() {
        assert_eq!(bmi_category(18.49), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_months_between_is_at_least_one() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let jan_late = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
        let next_mar = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(months_between(jan, jan_late), 1);
        assert_eq!(months_between(jan, next_mar), 14);
    }

    #[test]
    fn test_trend_uses_last_three_entries() {
        let entry = |d, weight| WeightEntry {
            date: NaiveDate::from_ymd_opt(2025, 2, d).unwrap(),
            weight,
        };
        let entries = [entry(1, 90.0), entry(2, 80.0), entry(3, 81.0), entry(4, 82.0)];
        assert_eq!(recent_trend(&entries), WeightTrend::Gaining);
        assert_eq!(recent_trend(&entries[..2]), WeightTrend::InsufficientData);
    }
}
