// ABOUTME: Tests for BMR, BMI, calorie targets, daily and weekly summaries, and weight stats
// ABOUTME: Formula values, WHO bands, date windows, progress against goals, and weight trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use recipebook::intelligence::nutrition::{
    bmi_category, calculate_bmi, calculate_bmr, daily_calorie_target, summarize_day,
    summarize_week, weight_stats,
};
use recipebook::models::{
    ActivityLevel, BmiCategory, MealLog, NutritionFacts, NutritionGoals, Sex, WeightEntry,
    WeightReport, WeightStats, WeightTrend,
};
use recipebook::ErrorCode;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

fn meal(name: &str, date: NaiveDate, calories: f64, protein: f64, carbs: f64, fat: f64) -> MealLog {
    MealLog {
        name: name.to_owned(),
        date,
        nutrition: NutritionFacts {
            calories,
            protein,
            carbs,
            fat,
            ..NutritionFacts::default()
        },
    }
}

fn goals() -> NutritionGoals {
    NutritionGoals {
        daily_calories: 2000.0,
        daily_protein: 100.0,
        daily_carbs: 250.0,
        daily_fat: 0.0,
        daily_fiber: None,
        daily_sugar: None,
        daily_sodium: None,
    }
}

// ============================================================================
// Energy and body composition
// ============================================================================

#[test]
fn test_bmr_mifflin_st_jeor() {
    // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25
    let bmr = calculate_bmr(60.0, 165.0, 25, Sex::Female).unwrap();
    assert!(approx(bmr, 1345.25));
}

#[test]
fn test_bmr_rejects_non_positive_measurements() {
    let err = calculate_bmr(70.0, 0.0, 30, Sex::Male).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(calculate_bmr(f64::NAN, 170.0, 30, Sex::Male).is_err());
}

#[test]
fn test_bmi_and_category() {
    let bmi = calculate_bmi(70.0, 175.0).unwrap();
    assert!(approx(bmi, 22.86));
    assert_eq!(bmi_category(bmi), BmiCategory::NormalWeight);
    assert_eq!(bmi_category(bmi).label(), "Normal weight");
    assert_eq!(bmi_category(31.2), BmiCategory::Obese);
}

#[test]
fn test_daily_calorie_target_by_activity() {
    assert!(approx(daily_calorie_target(1500.0, ActivityLevel::Sedentary), 1800.0));
    assert!(approx(
        daily_calorie_target(1500.0, ActivityLevel::ModeratelyActive),
        2325.0
    ));
    assert_eq!(
        ActivityLevel::from_str_or_default("couch"),
        ActivityLevel::Sedentary
    );
}

// ============================================================================
// Daily summaries
// ============================================================================

#[test]
fn test_summary_only_counts_meals_on_that_day() {
    let meals = vec![
        meal("Oatmeal", day(1), 300.0, 10.0, 50.0, 5.0),
        meal("Lunch", day(1), 700.0, 40.0, 80.0, 20.0),
        meal("Leftovers", day(2), 500.0, 25.0, 40.0, 15.0),
    ];
    let summary = summarize_day(day(1), &meals, None);

    assert_eq!(summary.meal_count, 2);
    assert!(approx(summary.totals.calories, 1000.0));
    assert!(approx(summary.totals.protein, 50.0));
    assert!(summary.progress.is_none());
}

#[test]
fn test_summary_progress_against_goals() {
    let meals = vec![
        meal("Breakfast", day(4), 500.0, 30.0, 60.0, 10.0),
        meal("Dinner", day(4), 1000.0, 45.0, 90.0, 35.0),
    ];
    let summary = summarize_day(day(4), &meals, Some(&goals()));
    let progress = summary.progress.unwrap();

    assert!(approx(progress.calories_percent, 75.0));
    assert!(approx(progress.protein_percent, 75.0));
    assert!(approx(progress.carbs_percent, 60.0));
    // zero goal reports zero rather than dividing by it
    assert!(approx(progress.fat_percent, 0.0));
    assert!(approx(progress.remaining.calories, 500.0));
    assert!(approx(progress.remaining.fat, -45.0));
    assert_eq!(summary.goals, Some(goals()));
}

#[test]
fn test_empty_day_is_all_zero() {
    let summary = summarize_day(day(9), &[], Some(&goals()));
    assert_eq!(summary.meal_count, 0);
    assert!(approx(summary.totals.calories, 0.0));
    assert!(approx(summary.progress.unwrap().calories_percent, 0.0));
}

#[test]
fn test_summary_serializes_camel_case() {
    let summary = summarize_day(day(1), &[meal("Toast", day(1), 200.0, 6.0, 30.0, 4.0)], None);
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["mealCount"], 1);
    assert_eq!(value["date"], "2025-03-01");
    assert!(value.get("progress").is_none());
}

// ============================================================================
// Weekly summaries
// ============================================================================

#[test]
fn test_week_covers_seven_days_ending_on_date() {
    let meals = vec![
        meal("Too early", day(2), 900.0, 30.0, 100.0, 30.0),
        meal("Start", day(3), 700.0, 35.0, 70.0, 21.0),
        meal("Midweek", day(6), 350.0, 14.0, 35.0, 7.0),
        meal("End", day(9), 350.0, 21.0, 35.0, 14.0),
        meal("Too late", day(10), 900.0, 30.0, 100.0, 30.0),
    ];
    let week = summarize_week(day(9), &meals);

    assert_eq!(week.week_start, day(3));
    assert_eq!(week.week_end, day(9));
    assert_eq!(week.daily_summaries.len(), 7);
    assert_eq!(week.daily_summaries[0].date, day(3));
    assert_eq!(week.daily_summaries[6].date, day(9));
    // empty days are listed with zero totals
    assert_eq!(week.daily_summaries[1].meal_count, 0);
    assert!(approx(week.daily_summaries[1].totals.calories, 0.0));

    assert!(approx(week.weekly_totals.calories, 1400.0));
    assert!(approx(week.weekly_totals.protein, 70.0));
    assert!(approx(week.weekly_averages.calories, 200.0));
    assert!(approx(week.weekly_averages.carbs, 20.0));
    assert!(approx(week.weekly_averages.fat, 6.0));
}

#[test]
fn test_week_crosses_month_boundary() {
    let end = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    let week = summarize_week(end, &[]);
    assert_eq!(week.week_start, NaiveDate::from_ymd_opt(2025, 2, 24).unwrap());
    assert_eq!(week.daily_summaries.len(), 7);
    assert!(approx(week.weekly_averages.calories, 0.0));
}

#[test]
fn test_week_serializes_flat_day_rows() {
    let week = summarize_week(day(9), &[meal("Toast", day(9), 200.0, 6.0, 30.0, 4.0)]);
    let value = serde_json::to_value(&week).unwrap();
    assert_eq!(value["weekStart"], "2025-03-03");
    assert_eq!(value["dailySummaries"][6]["mealCount"], 1);
    assert_eq!(value["dailySummaries"][6]["calories"], 200.0);
    assert!(value["weeklyAverages"].get("protein").is_some());
}

// ============================================================================
// Weight statistics
// ============================================================================

fn weigh(year: i32, month: u32, d: u32, weight: f64) -> WeightEntry {
    WeightEntry {
        date: NaiveDate::from_ymd_opt(year, month, d).unwrap(),
        weight,
    }
}

fn stats(entries: &[WeightEntry]) -> WeightStats {
    match weight_stats(entries).unwrap() {
        WeightReport::Stats(stats) => stats,
        other => panic!("expected stats, got {other:?}"),
    }
}

#[test]
fn test_weight_needs_two_entries() {
    assert_eq!(
        weight_stats(&[]).unwrap(),
        WeightReport::NotEnoughData { entry_count: 0 }
    );
    assert_eq!(
        weight_stats(&[weigh(2025, 1, 1, 80.0)]).unwrap(),
        WeightReport::NotEnoughData { entry_count: 1 }
    );
}

#[test]
fn test_weight_stats_sorted_by_date() {
    // given out of order; first and current follow the calendar
    let entries = [
        weigh(2025, 4, 1, 77.0),
        weigh(2025, 1, 1, 80.0),
        weigh(2025, 2, 1, 81.5),
        weigh(2025, 3, 1, 78.0),
    ];
    let stats = stats(&entries);

    assert!(approx(stats.first_weight, 80.0));
    assert!(approx(stats.current_weight, 77.0));
    assert!(approx(stats.total_change, -3.0));
    assert!(approx(stats.total_change_percent, -3.75));
    assert_eq!(stats.months_tracked, 3);
    assert!(approx(stats.average_monthly_change, -1.0));
    assert!(approx(stats.highest_weight, 81.5));
    assert!(approx(stats.lowest_weight, 77.0));
    assert_eq!(stats.current_trend, WeightTrend::Losing);
    assert_eq!(stats.entry_count, 4);
    assert_eq!(stats.first_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(stats.last_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
}

#[test]
fn test_weight_same_month_counts_as_one_month() {
    let stats = stats(&[weigh(2025, 5, 2, 70.0), weigh(2025, 5, 30, 70.7)]);
    assert_eq!(stats.months_tracked, 1);
    assert!(approx(stats.average_monthly_change, 0.7));
    assert!(approx(stats.total_change_percent, 1.0));
    assert_eq!(stats.current_trend, WeightTrend::InsufficientData);
}

#[test]
fn test_weight_trend_gaining_and_stable() {
    let gaining = [
        weigh(2025, 1, 1, 70.0),
        weigh(2025, 1, 8, 69.0),
        weigh(2025, 1, 15, 70.5),
    ];
    assert_eq!(stats(&gaining).current_trend, WeightTrend::Gaining);

    let stable = [
        weigh(2025, 1, 1, 70.0),
        weigh(2025, 1, 8, 71.0),
        weigh(2025, 1, 15, 70.0),
    ];
    assert_eq!(stats(&stable).current_trend, WeightTrend::Stable);
}

#[test]
fn test_weight_change_is_rounded() {
    let stats = stats(&[weigh(2025, 1, 1, 70.0), weigh(2025, 4, 1, 71.0)]);
    // 1 kg over 3 months
    assert!(approx(stats.average_monthly_change, 0.33));
    assert!(approx(stats.total_change_percent, 1.43));
}

#[test]
fn test_weight_rejects_non_positive_entries() {
    let err = weight_stats(&[weigh(2025, 1, 1, 70.0), weigh(2025, 2, 1, 0.0)]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_weight_report_serializes_with_status() {
    let value = serde_json::to_value(weight_stats(&[weigh(2025, 1, 1, 70.0)]).unwrap()).unwrap();
    assert_eq!(value["status"], "not_enough_data");
    assert_eq!(value["entryCount"], 1);
}
