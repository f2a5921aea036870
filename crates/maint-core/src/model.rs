//! Vehicle data records as stored in the vehicle document.
//!
//! Field names serialize in camelCase to match the on-disk YAML schema
//! (`intervalMiles`, `ruleKey`, ...). Rule window fields carry their
//! defaults through serde so hand-written documents can omit them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mileage sentinel for a rule window with no upper bound.
pub const OPEN_END_MILES: f64 = 999_999_999.0;

/// Month sentinel for a rule window with no upper bound.
pub const OPEN_END_MONTHS: f64 = 9_999.0;

/// Vehicle identification and purchase information.
///
/// Immutable facts; used for the display name and as the mileage/date
/// fallback when no state override or history exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    pub year: i32,
    pub purchase_date: NaiveDate,
    pub purchase_miles: f64,
}

impl Car {
    /// Human-readable vehicle name, e.g. "2017 Subaru BRZ Limited".
    pub fn name(&self) -> String {
        match self.trim.as_deref() {
            Some(trim) => format!("{} {} {} {}", self.year, self.make, self.model, trim),
            None => format!("{} {} {}", self.year, self.make, self.model),
        }
    }
}

/// A maintenance rule defining when a service should be performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Service subject, e.g. "engine oil and filter"
    pub item: String,
    /// Action, e.g. "replace"
    pub verb: String,
    /// Lifecycle phase disambiguating rules that share item+verb,
    /// e.g. "initial" vs "ongoing"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_months: Option<f64>,
    /// Shorter interval for demanding use; falls back to the normal
    /// interval when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severe_interval_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severe_interval_months: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Lower bound of the half-open activation window `[start, stop)`
    #[serde(default, skip_serializing_if = "is_zero")]
    pub start_miles: f64,
    #[serde(default = "open_end_miles", skip_serializing_if = "is_open_end_miles")]
    pub stop_miles: f64,
    /// Month window bounds; stored for round-trip fidelity, not consulted
    /// by status evaluation
    #[serde(default, skip_serializing_if = "is_zero")]
    pub start_months: f64,
    #[serde(default = "open_end_months", skip_serializing_if = "is_open_end_months")]
    pub stop_months: f64,
    /// Informational flag for parts not fitted at the factory
    #[serde(default, skip_serializing_if = "is_false")]
    pub aftermarket: bool,
}

fn open_end_miles() -> f64 {
    OPEN_END_MILES
}

fn open_end_months() -> f64 {
    OPEN_END_MONTHS
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

fn is_open_end_miles(value: &f64) -> bool {
    *value == OPEN_END_MILES
}

fn is_open_end_months(value: &f64) -> bool {
    *value == OPEN_END_MONTHS
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Rule {
    /// Natural key joining history entries to this rule:
    /// `item/verb`, or `item/verb/phase` when a phase is set.
    pub fn key(&self) -> String {
        match self.phase.as_deref() {
            Some(phase) => format!("{}/{}/{}", self.item, self.verb, phase),
            None => format!("{}/{}", self.item, self.verb),
        }
    }

    /// Phase-stripped identity, shared by all phases of a lifecycle rule.
    pub fn base_key(&self) -> String {
        format!("{}/{}", self.item, self.verb)
    }

    /// Display name for tables, e.g. "replace engine oil and filter (initial)".
    pub fn display_name(&self) -> String {
        match self.phase.as_deref() {
            Some(phase) => format!("{} {} ({})", self.verb, self.item, phase),
            None => format!("{} {}", self.verb, self.item),
        }
    }

    /// Whether this rule applies at the given mileage.
    ///
    /// The window is half-open: active at `start_miles`, inactive at
    /// `stop_miles`. A malformed window (start above stop) is never active.
    pub fn is_active_at(&self, miles: f64) -> bool {
        self.start_miles <= miles && miles < self.stop_miles
    }

    pub fn has_severe_intervals(&self) -> bool {
        self.severe_interval_miles.is_some() || self.severe_interval_months.is_some()
    }
}

/// A record of maintenance performed.
///
/// `rule_key` is free text; it should match some rule's key but dangling
/// keys are tolerated. Such entries never match a rule's lookup and are
/// invisible to status calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub rule_key: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}
