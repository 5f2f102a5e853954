// ABOUTME: Best-effort calorie and time extraction from loosely typed recipe JSON
// ABOUTME: Ordered (field, parser) rules; first successful parse wins, absence is None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors

//! Field Extraction
//!
//! External recipe records name the same value many ways (`calories`,
//! `nutritionInfo.calories`, `"450 kcal"`, `"PT1H30M"`). Each extractor is an
//! ordered list of field rules. The first present, non-null field decides the
//! result; if it does not parse the answer is `None`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::trace;

/// Parser for a single field value
pub type FieldParser = fn(&Value) -> Option<f64>;

/// One extraction rule
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// JSON key looked up on the record
    pub field: &'static str,
    /// Conversion from the raw value
    pub parser: FieldParser,
}

impl FieldRule {
    const fn new(field: &'static str, parser: FieldParser) -> Self {
        Self { field, parser }
    }
}

/// First run of digits in a string
static DIGITS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[0-9]+").ok());

/// ISO-8601 duration such as `PT1H30M` or `P0DT45M`
static ISO_DURATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^P(?:([0-9]+)D)?T?(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?$").ok()
});

/// Calorie rules, in priority order
pub const CALORIE_RULES: &[FieldRule] = &[
    FieldRule::new("calories", parse_calories),
    FieldRule::new("calorie", parse_calories),
    FieldRule::new("cal", parse_calories),
    FieldRule::new("nutrition", parse_calories),
    FieldRule::new("nutritionInfo", parse_calories),
    FieldRule::new("energy", parse_calories),
];

/// Direct total-time rules, in priority order
pub const TOTAL_TIME_RULES: &[FieldRule] = &[
    FieldRule::new("totalTime", parse_minutes),
    FieldRule::new("total_time", parse_minutes),
    FieldRule::new("time", parse_minutes),
];

/// Preparation-time rules
pub const PREP_TIME_RULES: &[FieldRule] = &[
    FieldRule::new("prepTime", parse_minutes),
    FieldRule::new("prep_time", parse_minutes),
];

/// Cooking-time rules
pub const COOK_TIME_RULES: &[FieldRule] = &[
    FieldRule::new("cookTime", parse_minutes),
    FieldRule::new("cook_time", parse_minutes),
];

/// Parse the first field that is present and non-null
///
/// Later rules are not consulted once a field is found, even when its value
/// does not parse.
#[must_use]
pub fn extract_first(record: &Value, rules: &[FieldRule]) -> Option<f64> {
    let (rule, raw) = first_present(record, rules)?;
    let parsed = (rule.parser)(raw);
    if parsed.is_none() {
        trace!(field = rule.field, "Field present but not parseable");
    }
    parsed
}

fn first_present<'a>(
    record: &'a Value,
    rules: &'a [FieldRule],
) -> Option<(&'a FieldRule, &'a Value)> {
    rules.iter().find_map(|rule| {
        record
            .get(rule.field)
            .filter(|value| !value.is_null())
            .map(|raw| (rule, raw))
    })
}

/// Calories per serving, when the record states them anywhere recognizable
#[must_use]
pub fn extract_calories(record: &Value) -> Option<f64> {
    extract_first(record, CALORIE_RULES)
}

/// Preparation time in minutes
#[must_use]
pub fn extract_prep_time(record: &Value) -> Option<f64> {
    extract_first(record, PREP_TIME_RULES)
}

/// Cooking time in minutes
#[must_use]
pub fn extract_cook_time(record: &Value) -> Option<f64> {
    extract_first(record, COOK_TIME_RULES)
}

/// Total time in minutes
///
/// A present total field decides the result, parsed or not. Without one, prep
/// and cook are summed, or whichever one exists is returned.
#[must_use]
pub fn extract_total_time(record: &Value) -> Option<f64> {
    if first_present(record, TOTAL_TIME_RULES).is_some() {
        return extract_first(record, TOTAL_TIME_RULES);
    }
    match (extract_prep_time(record), extract_cook_time(record)) {
        (Some(prep), Some(cook)) => Some(prep + cook),
        (prep, cook) => prep.or(cook),
    }
}

/// Numbers pass through; strings yield their first digit run
#[must_use]
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => first_digit_run(s),
        _ => None,
    }
}

/// [`parse_number`], or one level into an object's `calories` key
fn parse_calories(value: &Value) -> Option<f64> {
    match value {
        Value::Object(fields) => fields.get("calories").and_then(parse_number),
        other => parse_number(other),
    }
}

/// Minutes from a number, an ISO-8601 duration, or a string with digits
#[must_use]
pub fn parse_minutes(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => iso_duration_minutes(s).or_else(|| first_digit_run(s)),
        other => parse_number(other),
    }
}

fn first_digit_run(text: &str) -> Option<f64> {
    let pattern = DIGITS_PATTERN.as_ref()?;
    pattern.find(text)?.as_str().parse().ok()
}

fn iso_duration_minutes(text: &str) -> Option<f64> {
    let pattern = ISO_DURATION_PATTERN.as_ref()?;
    let caps = pattern.captures(text.trim())?;
    let part = |index: usize| -> f64 {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    // "P" alone, or "PT", carries no duration
    if (1..=4).all(|index| caps.get(index).is_none()) {
        return None;
    }
    Some(part(1) * 1440.0 + part(2) * 60.0 + part(3) + part(4) / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_calorie_string_uses_first_digit_run() {
        assert_eq!(extract_calories(&json!({"calories": "450 kcal"})), Some(450.0));
        assert_eq!(extract_calories(&json!({})), None);
    }

    #[test]
    fn test_calories_recurse_one_level() {
        let record = json!({"nutritionInfo": {"calories": "320"}});
        assert_eq!(extract_calories(&record), Some(320.0));
        let too_deep = json!({"nutrition": {"facts": {"calories": 100}}});
        assert_eq!(extract_calories(&too_deep), None);
    }

    #[test]
    fn test_unparseable_first_field_is_none() {
        let record = json!({"calories": "unknown", "energy": 210});
        assert_eq!(extract_calories(&record), None);
        let record = json!({"calories": null, "energy": 210});
        assert_eq!(extract_calories(&record), Some(210.0));
    }

    #[test]
    fn test_iso_durations() {
        assert_eq!(parse_minutes(&json!("PT1H30M")), Some(90.0));
        assert_eq!(parse_minutes(&json!("PT45M")), Some(45.0));
        assert_eq!(parse_minutes(&json!("25 minutes")), Some(25.0));
        assert_eq!(parse_minutes(&json!("PT")), None);
    }

    #[test]
    fn test_total_time_sums_components() {
        assert_eq!(
            extract_total_time(&json!({"prepTime": 10, "cookTime": 20})),
            Some(30.0)
        );
        assert_eq!(extract_total_time(&json!({"cook_time": "15 min"})), Some(15.0));
        assert_eq!(
            extract_total_time(&json!({"totalTime": 60, "prepTime": 10})),
            Some(60.0)
        );
        assert_eq!(extract_total_time(&json!({"servings": 4})), None);
    }
}
