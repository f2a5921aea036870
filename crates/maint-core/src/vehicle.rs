//! The vehicle aggregate: rules, history, and the service-due evaluation.

use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::MaintError;
use crate::model::{Car, HistoryEntry, Rule};
use crate::schedule::{self, ServiceDue, StatusQuery};
use crate::status::Status;

/// Sort key for history listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySort {
    Date,
    /// Missing mileage compares as 0
    Miles,
    /// Sorts by (rule_key, date)
    Rule,
}

impl FromStr for HistorySort {
    type Err = MaintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "date" => Ok(Self::Date),
            "miles" => Ok(Self::Miles),
            "rule" => Ok(Self::Rule),
            other => Err(MaintError::InvalidInput(format!(
                "unknown sort key \"{}\" (use date, miles, or rule)",
                other
            ))),
        }
    }
}

/// Complete vehicle record: car facts, maintenance rules, service history,
/// and optional explicit state overrides.
///
/// The aggregate is read-only; edits go through the document store and a
/// reload. Every evaluation is a pure function of the data held here.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub car: Car,
    pub rules: Vec<Rule>,
    pub history: Vec<HistoryEntry>,
    state_current_miles: Option<f64>,
    state_as_of_date: Option<NaiveDate>,
}

impl Vehicle {
    pub fn new(
        car: Car,
        rules: Vec<Rule>,
        history: Vec<HistoryEntry>,
        current_miles: Option<f64>,
        as_of_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            car,
            rules,
            history,
            state_current_miles: current_miles,
            state_as_of_date: as_of_date,
        }
    }

    /// Current mileage: explicit state override, else the highest mileage
    /// recorded in history, else the purchase mileage.
    pub fn current_miles(&self) -> f64 {
        if let Some(miles) = self.state_current_miles {
            return miles;
        }
        self.history
            .iter()
            .filter_map(|entry| entry.mileage)
            .reduce(f64::max)
            .unwrap_or(self.car.purchase_miles)
    }

    /// Date of the current state: explicit override, else today.
    ///
    /// The override is what makes evaluation deterministic under test.
    pub fn as_of_date(&self) -> NaiveDate {
        self.state_as_of_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// The most recent service entry overall, for display summaries.
    pub fn last_service(&self) -> Option<&HistoryEntry> {
        self.history.iter().max_by(|a, b| {
            a.date.cmp(&b.date).then_with(|| {
                a.mileage
                    .unwrap_or(0.0)
                    .total_cmp(&b.mileage.unwrap_or(0.0))
            })
        })
    }

    /// Find a rule by its natural key.
    pub fn get_rule(&self, key: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.key() == key)
    }

    /// All history entries recorded under a specific rule key.
    pub fn get_history_for_rule(&self, key: &str) -> Vec<&HistoryEntry> {
        self.history
            .iter()
            .filter(|entry| entry.rule_key == key)
            .collect()
    }

    /// The most recent service recorded under an exact rule key.
    pub fn get_last_service(&self, key: &str) -> Option<&HistoryEntry> {
        self.get_history_for_rule(key)
            .into_iter()
            .max_by_key(|entry| entry.date)
    }

    /// The most recent service for an item/verb combination regardless of
    /// phase, matched by prefix on `"{item}/{verb}"`.
    ///
    /// Lifecycle rules share history across phases, so a part's "initial"
    /// record satisfies the "ongoing" rule's lookup. Entries carrying a
    /// mileage are preferred (the calculation needs one); among those the
    /// greatest `(date, mileage)` pair wins.
    pub fn get_last_service_for_item(&self, item: &str, verb: &str) -> Option<&HistoryEntry> {
        let base_key = format!("{}/{}", item, verb);
        let matching: Vec<&HistoryEntry> = self
            .history
            .iter()
            .filter(|entry| entry.rule_key.starts_with(&base_key))
            .collect();

        let best_with_mileage = matching
            .iter()
            .copied()
            .filter(|entry| entry.mileage.is_some())
            .max_by(|a, b| {
                a.date.cmp(&b.date).then_with(|| {
                    a.mileage
                        .unwrap_or(0.0)
                        .total_cmp(&b.mileage.unwrap_or(0.0))
                })
            });
        if best_with_mileage.is_some() {
            return best_with_mileage;
        }
        matching.into_iter().max_by_key(|entry| entry.date)
    }

    /// History entries sorted by the given key.
    ///
    /// `reverse` flips the comparison (newest/highest first), leaving
    /// equal elements in recorded order.
    pub fn get_history_sorted(&self, sort: HistorySort, reverse: bool) -> Vec<&HistoryEntry> {
        let mut entries: Vec<&HistoryEntry> = self.history.iter().collect();
        entries.sort_by(|a, b| {
            let (a, b) = if reverse { (b, a) } else { (a, b) };
            match sort {
                HistorySort::Date => a.date.cmp(&b.date),
                HistorySort::Miles => a
                    .mileage
                    .unwrap_or(0.0)
                    .total_cmp(&b.mileage.unwrap_or(0.0)),
                HistorySort::Rule => a
                    .rule_key
                    .cmp(&b.rule_key)
                    .then_with(|| a.date.cmp(&b.date)),
            }
        });
        entries
    }

    /// Calculate when a service is due for a given rule.
    ///
    /// - Outside the rule's mileage window: `Inactive`, nothing computed.
    /// - Last service is matched on item/verb across phases.
    /// - No history: due at `start_miles + interval`; with history: due at
    ///   last service plus interval.
    /// - Neither axis computable: `Unknown`.
    /// - Both axes computable: the worse of the two classifications wins.
    pub fn calculate_service_due(&self, rule: &Rule, query: &StatusQuery) -> ServiceDue {
        let current_miles = self.current_miles();
        let current_date = self.as_of_date();

        if !rule.is_active_at(current_miles) {
            return ServiceDue::inactive(rule.clone());
        }

        let last = self.get_last_service_for_item(&rule.item, &rule.verb);
        let last_miles = last.and_then(|entry| entry.mileage);
        let last_date = last.map(|entry| entry.date);

        let (interval_miles, interval_months) = query.select_intervals(rule);
        let due_miles = schedule::due_mileage(last_miles, interval_miles, rule.start_miles);
        let due_date = schedule::due_date(last_date, interval_months);

        let status = if due_miles.is_none() && due_date.is_none() {
            Status::Unknown
        } else {
            let mut status = Status::Ok;
            if let Some(due) = due_miles {
                status = schedule::classify(current_miles, due, query.due_soon_miles);
            }
            if let Some(due) = due_date {
                let date_status = schedule::classify(
                    current_date.num_days_from_ce(),
                    due.num_days_from_ce(),
                    (query.due_soon_months * 30.0) as i32,
                );
                if date_status < status {
                    status = date_status;
                }
            }
            status
        };

        let (severe_due_miles, severe_due_date) = if !query.severe && rule.has_severe_intervals() {
            let (severe_miles, severe_months) =
                query.clone().severe(true).select_intervals(rule);
            (
                schedule::due_mileage(last_miles, severe_miles, rule.start_miles),
                schedule::due_date(last_date, severe_months),
            )
        } else {
            (None, None)
        };

        ServiceDue {
            rule: rule.clone(),
            status,
            last_service_miles: last_miles,
            last_service_date: last_date,
            due_miles,
            due_date,
            severe_due_miles,
            severe_due_date,
            miles_remaining: due_miles.map(|due| due - current_miles),
            time_remaining_days: due_date
                .map(|due| due.signed_duration_since(current_date).num_days()),
        }
    }

    /// Evaluate every rule in list order, skipping excluded verbs.
    pub fn get_all_service_status(&self, query: &StatusQuery) -> Vec<ServiceDue> {
        self.rules
            .iter()
            .filter(|rule| !query.excludes_verb(&rule.verb))
            .map(|rule| self.calculate_service_due(rule, query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OPEN_END_MILES, OPEN_END_MONTHS};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn car() -> Car {
        Car {
            make: "Subaru".to_string(),
            model: "BRZ".to_string(),
            trim: None,
            year: 2017,
            purchase_date: d(2017, 3, 15),
            purchase_miles: 12.0,
        }
    }

    fn rule(item: &str, verb: &str) -> Rule {
        Rule {
            item: item.to_string(),
            verb: verb.to_string(),
            phase: None,
            interval_miles: None,
            interval_months: None,
            severe_interval_miles: None,
            severe_interval_months: None,
            notes: None,
            start_miles: 0.0,
            stop_miles: OPEN_END_MILES,
            start_months: 0.0,
            stop_months: OPEN_END_MONTHS,
            aftermarket: false,
        }
    }

    fn entry(rule_key: &str, date: NaiveDate, mileage: Option<f64>) -> HistoryEntry {
        HistoryEntry {
            rule_key: rule_key.to_string(),
            date,
            mileage,
            performed_by: None,
            notes: None,
            cost: None,
        }
    }

    fn vehicle(
        rules: Vec<Rule>,
        history: Vec<HistoryEntry>,
        miles: Option<f64>,
        as_of: Option<NaiveDate>,
    ) -> Vehicle {
        Vehicle::new(car(), rules, history, miles, as_of)
    }

    #[test]
    fn test_current_miles_resolution() {
        let history = vec![
            entry("oil/replace", d(2024, 1, 1), Some(48_000.0)),
            entry("oil/replace", d(2024, 6, 1), Some(55_000.0)),
            entry("wipers/replace", d(2024, 7, 1), None),
        ];

        let explicit = vehicle(vec![], history.clone(), Some(58_000.0), None);
        assert_eq!(explicit.current_miles(), 58_000.0);

        let from_history = vehicle(vec![], history, None, None);
        assert_eq!(from_history.current_miles(), 55_000.0);

        let from_purchase = vehicle(vec![], vec![], None, None);
        assert_eq!(from_purchase.current_miles(), 12.0);
    }

    #[test]
    fn test_no_intervals_no_history_is_unknown() {
        let r = rule("timing belt", "inspect");
        let v = vehicle(vec![r.clone()], vec![], Some(50_000.0), Some(d(2025, 1, 1)));

        let due = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::Unknown);
        assert_eq!(due.due_miles, None);
        assert_eq!(due.due_date, None);
        assert_eq!(due.miles_remaining, None);
        assert_eq!(due.time_remaining_days, None);
        assert!(!due.is_due());
    }

    #[test]
    fn test_time_only_rule_without_history_is_unknown() {
        // No zero-point fallback exists on the time axis.
        let mut r = rule("brake fluid", "replace");
        r.interval_months = Some(24.0);
        let v = vehicle(vec![r.clone()], vec![], Some(50_000.0), Some(d(2025, 1, 1)));

        let due = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::Unknown);
        assert_eq!(due.due_date, None);
    }

    #[test]
    fn test_fresh_at_zero() {
        let mut r = rule("oil", "replace");
        r.interval_miles = Some(7_500.0);
        let v = vehicle(vec![r.clone()], vec![], Some(5_000.0), Some(d(2025, 1, 1)));

        let due = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::Ok);
        assert_eq!(due.due_miles, Some(7_500.0));
        assert_eq!(due.miles_remaining, Some(2_500.0));
        assert_eq!(due.last_service_miles, None);
    }

    #[test]
    fn test_due_soon_boundary() {
        let mut r = rule("oil", "replace");
        r.interval_miles = Some(7_500.0);
        let v = vehicle(vec![r.clone()], vec![], Some(6_800.0), Some(d(2025, 1, 1)));

        let due = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::DueSoon);
        assert_eq!(due.miles_remaining, Some(700.0));
        assert!(due.is_due());
    }

    #[test]
    fn test_due_resets_at_last_service() {
        let mut r = rule("engine oil and filter", "replace");
        r.interval_miles = Some(7_500.0);
        let history = vec![entry(
            "engine oil and filter/replace",
            d(2024, 6, 1),
            Some(52_000.0),
        )];
        let v = vehicle(vec![r.clone()], history, Some(55_000.0), Some(d(2024, 9, 1)));

        let due = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.due_miles, Some(59_500.0));
        assert_eq!(due.miles_remaining, Some(4_500.0));
        assert_eq!(due.last_service_miles, Some(52_000.0));
        assert_eq!(due.last_service_date, Some(d(2024, 6, 1)));
        assert_eq!(due.status, Status::Ok);
    }

    #[test]
    fn test_overdue_by_date_despite_mileage_ok() {
        let mut r = rule("engine oil and filter", "replace");
        r.interval_miles = Some(7_500.0);
        r.interval_months = Some(7.5);
        let history = vec![entry(
            "engine oil and filter/replace",
            d(2024, 1, 15),
            Some(90_000.0),
        )];
        let v = vehicle(vec![r.clone()], history, Some(91_000.0), Some(d(2025, 1, 15)));

        let due = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::Overdue);
        assert_eq!(due.miles_remaining, Some(6_500.0));
        assert!(due.time_remaining_days.unwrap() < 0);
    }

    #[test]
    fn test_due_soon_by_date() {
        let mut r = rule("brake fluid", "replace");
        r.interval_months = Some(24.0);
        let history = vec![entry("brake fluid/replace", d(2023, 2, 1), Some(40_000.0))];
        let v = vehicle(vec![r.clone()], history, Some(41_000.0), Some(d(2025, 1, 15)));

        // Due 2025-02-01, 17 days out, inside the 30-day threshold.
        let due = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::DueSoon);
        assert_eq!(due.due_date, Some(d(2025, 2, 1)));
        assert_eq!(due.time_remaining_days, Some(17));
        assert_eq!(due.due_miles, None);
    }

    #[test]
    fn test_escalation_never_downgrades() {
        // Overdue by miles, comfortably inside the time interval: the
        // less-urgent date status must not soften the result.
        let mut r = rule("engine oil and filter", "replace");
        r.interval_miles = Some(7_500.0);
        r.interval_months = Some(12.0);
        let history = vec![entry(
            "engine oil and filter/replace",
            d(2024, 6, 1),
            Some(50_000.0),
        )];
        let v = vehicle(vec![r.clone()], history, Some(58_000.0), Some(d(2024, 8, 1)));

        let due = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::Overdue);
        assert!(due.miles_remaining.unwrap() < 0.0);
        assert!(due.time_remaining_days.unwrap() > 0);
    }

    #[test]
    fn test_aftermarket_activation_window() {
        let mut r = rule("limited slip differential fluid", "replace");
        r.interval_miles = Some(10_000.0);
        r.start_miles = 60_000.0;
        r.aftermarket = true;

        let before = vehicle(vec![r.clone()], vec![], Some(50_000.0), Some(d(2025, 1, 1)));
        let due = before.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::Inactive);
        assert_eq!(due.due_miles, None);
        assert_eq!(due.miles_remaining, None);

        let after = vehicle(vec![r.clone()], vec![], Some(65_000.0), Some(d(2025, 1, 1)));
        let due = after.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(due.status, Status::Ok);
        assert_eq!(due.due_miles, Some(70_000.0));
        assert_eq!(due.miles_remaining, Some(5_000.0));
    }

    #[test]
    fn test_phase_agnostic_history_lookup() {
        let history = vec![entry("coolant/replace/initial", d(2023, 5, 1), Some(30_000.0))];
        let v = vehicle(vec![], history, Some(45_000.0), Some(d(2025, 1, 1)));

        let found = v.get_last_service_for_item("coolant", "replace");
        assert_eq!(found.unwrap().mileage, Some(30_000.0));
    }

    #[test]
    fn test_lifecycle_rule_uses_sibling_phase_history() {
        let mut ongoing = rule("coolant", "replace");
        ongoing.phase = Some("ongoing".to_string());
        ongoing.interval_miles = Some(60_000.0);
        let history = vec![entry("coolant/replace/initial", d(2023, 5, 1), Some(30_000.0))];
        let v = vehicle(
            vec![ongoing.clone()],
            history,
            Some(45_000.0),
            Some(d(2025, 1, 1)),
        );

        let due = v.calculate_service_due(&ongoing, &StatusQuery::new());
        assert_eq!(due.last_service_miles, Some(30_000.0));
        assert_eq!(due.due_miles, Some(90_000.0));
    }

    #[test]
    fn test_lookup_prefers_entries_with_mileage() {
        let history = vec![
            entry("oil/replace", d(2024, 8, 1), None),
            entry("oil/replace", d(2024, 6, 1), Some(52_000.0)),
        ];
        let v = vehicle(vec![], history, None, None);

        // The newer entry has no mileage; the older one still wins.
        let found = v.get_last_service_for_item("oil", "replace").unwrap();
        assert_eq!(found.date, d(2024, 6, 1));
        assert_eq!(found.mileage, Some(52_000.0));
    }

    #[test]
    fn test_lookup_falls_back_to_date_only() {
        let history = vec![
            entry("wipers/replace", d(2024, 3, 1), None),
            entry("wipers/replace", d(2024, 8, 1), None),
        ];
        let v = vehicle(vec![], history, None, None);

        let found = v.get_last_service_for_item("wipers", "replace").unwrap();
        assert_eq!(found.date, d(2024, 8, 1));
    }

    #[test]
    fn test_lookup_ignores_other_rules() {
        let history = vec![entry("oil/replace", d(2024, 6, 1), Some(52_000.0))];
        let v = vehicle(vec![], history, None, None);
        assert!(v.get_last_service_for_item("coolant", "replace").is_none());
    }

    #[test]
    fn test_severe_fallback_matches_normal() {
        // No severe intervals defined: severe mode degrades to normal.
        let mut r = rule("engine oil and filter", "replace");
        r.interval_miles = Some(7_500.0);
        let history = vec![entry(
            "engine oil and filter/replace",
            d(2024, 6, 1),
            Some(52_000.0),
        )];
        let v = vehicle(vec![r.clone()], history, Some(55_000.0), Some(d(2024, 9, 1)));

        let normal = v.calculate_service_due(&r, &StatusQuery::new());
        let severe = v.calculate_service_due(&r, &StatusQuery::new().severe(true));
        assert_eq!(normal.due_miles, severe.due_miles);
        assert_eq!(normal.status, severe.status);
    }

    #[test]
    fn test_severe_interval_shortens_due() {
        let mut r = rule("engine oil and filter", "replace");
        r.interval_miles = Some(7_500.0);
        r.severe_interval_miles = Some(3_750.0);
        let history = vec![entry(
            "engine oil and filter/replace",
            d(2024, 6, 1),
            Some(52_000.0),
        )];
        let v = vehicle(vec![r.clone()], history, Some(55_500.0), Some(d(2024, 9, 1)));

        let normal = v.calculate_service_due(&r, &StatusQuery::new());
        assert_eq!(normal.due_miles, Some(59_500.0));
        assert_eq!(normal.status, Status::Ok);
        // Normal mode reports what the severe schedule would demand.
        assert_eq!(normal.severe_due_miles, Some(55_750.0));

        let severe = v.calculate_service_due(&r, &StatusQuery::new().severe(true));
        assert_eq!(severe.due_miles, Some(55_750.0));
        assert_eq!(severe.status, Status::DueSoon);
        assert_eq!(severe.severe_due_miles, None);
    }

    #[test]
    fn test_miles_only_drops_date_axis() {
        let mut r = rule("engine oil and filter", "replace");
        r.interval_miles = Some(7_500.0);
        r.interval_months = Some(7.5);
        let history = vec![entry(
            "engine oil and filter/replace",
            d(2024, 1, 15),
            Some(90_000.0),
        )];
        let v = vehicle(vec![r.clone()], history, Some(91_000.0), Some(d(2025, 1, 15)));

        // Overdue on the time axis, but miles-only ignores it.
        let due = v.calculate_service_due(&r, &StatusQuery::new().miles_only());
        assert_eq!(due.status, Status::Ok);
        assert_eq!(due.due_date, None);
        assert_eq!(due.time_remaining_days, None);
    }

    #[test]
    fn test_time_only_drops_mileage_axis() {
        let mut r = rule("engine oil and filter", "replace");
        r.interval_miles = Some(7_500.0);
        r.interval_months = Some(7.5);
        let history = vec![entry(
            "engine oil and filter/replace",
            d(2024, 6, 1),
            Some(50_000.0),
        )];
        let v = vehicle(vec![r.clone()], history, Some(58_000.0), Some(d(2024, 8, 1)));

        // Overdue on the mileage axis, but time-only ignores it.
        let due = v.calculate_service_due(&r, &StatusQuery::new().time_only());
        assert_eq!(due.status, Status::Ok);
        assert_eq!(due.due_miles, None);
        assert_eq!(due.miles_remaining, None);
    }

    #[test]
    fn test_get_all_service_status_order_and_exclusion() {
        let mut oil = rule("oil", "replace");
        oil.interval_miles = Some(7_500.0);
        let mut tires = rule("tires", "rotate");
        tires.interval_miles = Some(5_000.0);
        let mut brakes = rule("brakes", "inspect");
        brakes.interval_miles = Some(10_000.0);
        let v = vehicle(
            vec![oil, tires, brakes],
            vec![],
            Some(2_000.0),
            Some(d(2025, 1, 1)),
        );

        let all = v.get_all_service_status(&StatusQuery::new());
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].rule.item, "oil");
        assert_eq!(all[1].rule.item, "tires");

        let filtered =
            v.get_all_service_status(&StatusQuery::new().exclude_verbs(["Rotate", "INSPECT"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].rule.item, "oil");
    }

    #[test]
    fn test_history_sorted() {
        let history = vec![
            entry("oil/replace", d(2024, 6, 1), Some(52_000.0)),
            entry("brakes/inspect", d(2024, 8, 1), None),
            entry("oil/replace", d(2024, 1, 1), Some(48_000.0)),
        ];
        let v = vehicle(vec![], history, None, None);

        let by_date = v.get_history_sorted(HistorySort::Date, true);
        assert_eq!(by_date[0].date, d(2024, 8, 1));
        assert_eq!(by_date[2].date, d(2024, 1, 1));

        // Missing mileage sorts as zero.
        let by_miles = v.get_history_sorted(HistorySort::Miles, false);
        assert_eq!(by_miles[0].mileage, None);
        assert_eq!(by_miles[2].mileage, Some(52_000.0));

        let by_rule = v.get_history_sorted(HistorySort::Rule, false);
        assert_eq!(by_rule[0].rule_key, "brakes/inspect");
        assert_eq!(by_rule[1].date, d(2024, 1, 1));
        assert_eq!(by_rule[2].date, d(2024, 6, 1));
    }

    #[test]
    fn test_last_service_overall() {
        let history = vec![
            entry("oil/replace", d(2024, 6, 1), Some(52_000.0)),
            entry("brakes/inspect", d(2024, 6, 1), Some(52_100.0)),
            entry("oil/replace", d(2024, 1, 1), Some(48_000.0)),
        ];
        let v = vehicle(vec![], history, None, None);

        // Date ties break on mileage.
        let last = v.last_service().unwrap();
        assert_eq!(last.rule_key, "brakes/inspect");
    }

    #[test]
    fn test_get_rule_and_history_for_rule() {
        let mut r = rule("oil", "replace");
        r.interval_miles = Some(7_500.0);
        let history = vec![
            entry("oil/replace", d(2024, 1, 1), Some(48_000.0)),
            entry("oil/replace", d(2024, 6, 1), Some(52_000.0)),
            entry("brakes/inspect", d(2024, 8, 1), None),
        ];
        let v = vehicle(vec![r], history, None, None);

        assert!(v.get_rule("oil/replace").is_some());
        assert!(v.get_rule("oil/inspect").is_none());
        assert_eq!(v.get_history_for_rule("oil/replace").len(), 2);
        assert_eq!(
            v.get_last_service("oil/replace").unwrap().date,
            d(2024, 6, 1)
        );
    }

    #[test]
    fn test_history_sort_from_str() {
        assert_eq!("date".parse::<HistorySort>().unwrap(), HistorySort::Date);
        assert_eq!("miles".parse::<HistorySort>().unwrap(), HistorySort::Miles);
        assert_eq!("rule".parse::<HistorySort>().unwrap(), HistorySort::Rule);
        assert!("cost".parse::<HistorySort>().is_err());
    }
}
