//! Parsing helpers for dates, verb lists, and record construction.

use chrono::{Local, NaiveDate};

use maint_core::model::{HistoryEntry, Rule, OPEN_END_MILES, OPEN_END_MONTHS};

use crate::cli::{EntryFields, RuleFields};

/// Parse a calendar date (YYYY-MM-DD).
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}: {}", value, e))
}

/// Split a comma-separated verb list, trimming whitespace.
pub fn parse_verb_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|verb| !verb.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a history entry from CLI fields, defaulting the date to today.
pub fn build_entry(rule_key: String, fields: &EntryFields) -> anyhow::Result<HistoryEntry> {
    let date = match fields.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };
    Ok(HistoryEntry {
        rule_key,
        date,
        mileage: fields.mileage,
        performed_by: fields.by.clone(),
        notes: fields.notes.clone(),
        cost: fields.cost,
    })
}

/// Build a rule from CLI fields, applying window defaults.
pub fn build_rule(fields: &RuleFields) -> Rule {
    Rule {
        item: fields.item.clone(),
        verb: fields.verb.clone(),
        phase: fields.phase.clone(),
        interval_miles: fields.interval_miles,
        interval_months: fields.interval_months,
        severe_interval_miles: fields.severe_interval_miles,
        severe_interval_months: fields.severe_interval_months,
        notes: fields.notes.clone(),
        start_miles: fields.start_miles.unwrap_or(0.0),
        stop_miles: fields.stop_miles.unwrap_or(OPEN_END_MILES),
        start_months: fields.start_months.unwrap_or(0.0),
        stop_months: fields.stop_months.unwrap_or(OPEN_END_MONTHS),
        aftermarket: fields.aftermarket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_date("06/01/2024").is_err());
    }

    #[test]
    fn test_parse_verb_list() {
        assert_eq!(
            parse_verb_list("inspect, rotate,"),
            vec!["inspect".to_string(), "rotate".to_string()]
        );
    }
}
