//! Due-point arithmetic and evaluation options.
//!
//! The helpers here are pure: they know nothing about vehicles or history
//! lists, only about the numbers handed to them. The state machine in
//! [`crate::vehicle`] composes them into a full evaluation.

use std::ops::Sub;

use chrono::{Days, Months, NaiveDate};
use serde::Serialize;

use crate::model::Rule;
use crate::status::Status;

/// Default due-soon threshold in miles.
pub const DEFAULT_DUE_SOON_MILES: f64 = 1_000.0;

/// Default due-soon threshold in months.
pub const DEFAULT_DUE_SOON_MONTHS: f64 = 1.0;

/// Next due mileage.
///
/// The clock resets at the last actual service, not a fixed schedule. With
/// no history the component is assumed fresh at the rule's activation
/// mileage, which handles aftermarket parts added at a nonzero start.
pub fn due_mileage(last_miles: Option<f64>, interval: Option<f64>, start_miles: f64) -> Option<f64> {
    let interval = interval?;
    match last_miles {
        Some(last) => Some(last + interval),
        None => Some(start_miles + interval),
    }
}

/// Next due date: last service date plus the interval in months.
///
/// Returns `None` unless both inputs are present; there is no "assume fresh
/// at year zero" fallback on the time axis. Whole months are added
/// calendar-correctly (month-end clamping), the fractional remainder as
/// `round(frac * 30)` days, so Jan 15 + 7.5 months lands on Aug 30.
pub fn due_date(last_date: Option<NaiveDate>, interval_months: Option<f64>) -> Option<NaiveDate> {
    let interval = interval_months?;
    let last = last_date?;
    let whole = interval.trunc();
    let days = ((interval - whole) * 30.0).round() as u64;
    last.checked_add_months(Months::new(whole as u32))?
        .checked_add_days(Days::new(days))
}

/// Compare a current value against a due threshold.
///
/// Exactly at due counts as overdue. Generic over the value type so the
/// one implementation serves both the mileage axis (f64) and the
/// date-as-day-number axis (i32).
pub fn classify<T>(current: T, due: T, soon_threshold: T) -> Status
where
    T: PartialOrd + Sub<Output = T> + Copy,
{
    if current >= due {
        Status::Overdue
    } else if current >= due - soon_threshold {
        Status::DueSoon
    } else {
        Status::Ok
    }
}

/// Options for a service-due evaluation.
#[derive(Debug, Clone)]
pub struct StatusQuery {
    /// Distance before the due mileage at which status becomes due-soon
    pub due_soon_miles: f64,
    /// Months (converted to days at 30/month) before the due date at which
    /// status becomes due-soon
    pub due_soon_months: f64,
    /// Use severe-driving intervals, falling back to normal per axis
    pub severe: bool,
    /// Ignore time-based intervals entirely
    pub miles_only: bool,
    /// Ignore mileage-based intervals entirely
    pub time_only: bool,
    /// Verbs to skip (case-insensitive) in aggregate evaluation
    pub exclude_verbs: Vec<String>,
}

impl Default for StatusQuery {
    fn default() -> Self {
        Self {
            due_soon_miles: DEFAULT_DUE_SOON_MILES,
            due_soon_months: DEFAULT_DUE_SOON_MONTHS,
            severe: false,
            miles_only: false,
            time_only: false,
            exclude_verbs: Vec::new(),
        }
    }
}

impl StatusQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn due_soon_miles(mut self, miles: f64) -> Self {
        self.due_soon_miles = miles;
        self
    }

    pub fn due_soon_months(mut self, months: f64) -> Self {
        self.due_soon_months = months;
        self
    }

    pub fn severe(mut self, severe: bool) -> Self {
        self.severe = severe;
        self
    }

    pub fn miles_only(mut self) -> Self {
        self.miles_only = true;
        self
    }

    pub fn time_only(mut self) -> Self {
        self.time_only = true;
        self
    }

    pub fn exclude_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_verbs = verbs.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a rule with this verb is skipped by aggregate evaluation.
    pub fn excludes_verb(&self, verb: &str) -> bool {
        self.exclude_verbs
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(verb))
    }

    /// Effective intervals for a rule under these options: severe-with-
    /// fallback selection, then axis filtering.
    pub fn select_intervals(&self, rule: &Rule) -> (Option<f64>, Option<f64>) {
        let mut miles = if self.severe {
            rule.severe_interval_miles.or(rule.interval_miles)
        } else {
            rule.interval_miles
        };
        let mut months = if self.severe {
            rule.severe_interval_months.or(rule.interval_months)
        } else {
            rule.interval_months
        };
        if self.miles_only {
            months = None;
        }
        if self.time_only {
            miles = None;
        }
        (miles, months)
    }
}

/// Calculated service-due information for one rule.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDue {
    pub rule: Rule,
    pub status: Status,
    pub last_service_miles: Option<f64>,
    pub last_service_date: Option<NaiveDate>,
    pub due_miles: Option<f64>,
    pub due_date: Option<NaiveDate>,
    /// What the severe schedule would demand, populated during normal
    /// evaluation of rules that define a severe interval
    pub severe_due_miles: Option<f64>,
    pub severe_due_date: Option<NaiveDate>,
    /// Signed distance to the due mileage; negative means overdue
    pub miles_remaining: Option<f64>,
    /// Signed day count to the due date; negative means overdue
    pub time_remaining_days: Option<i64>,
}

impl ServiceDue {
    /// Result for a rule outside its activation window; nothing else is
    /// computed for inactive rules.
    pub fn inactive(rule: Rule) -> Self {
        Self {
            rule,
            status: Status::Inactive,
            last_service_miles: None,
            last_service_date: None,
            due_miles: None,
            due_date: None,
            severe_due_miles: None,
            severe_due_date: None,
            miles_remaining: None,
            time_remaining_days: None,
        }
    }

    pub fn is_due(&self) -> bool {
        matches!(self.status, Status::Overdue | Status::DueSoon)
    }
}
