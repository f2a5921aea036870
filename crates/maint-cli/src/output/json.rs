//! JSON views for --json output.

use maint_core::{HistoryEntry, Rule, ServiceDue};

/// JSON view of one service-due result, keyed like the vehicle document.
pub fn service_due_json(due: &ServiceDue) -> serde_json::Value {
    serde_json::json!({
        "key": due.rule.key(),
        "displayName": due.rule.display_name(),
        "status": due.status,
        "isDue": due.is_due(),
        "lastServiceMiles": due.last_service_miles,
        "lastServiceDate": due.last_service_date,
        "dueMiles": due.due_miles,
        "dueDate": due.due_date,
        "severeDueMiles": due.severe_due_miles,
        "severeDueDate": due.severe_due_date,
        "milesRemaining": due.miles_remaining,
        "timeRemainingDays": due.time_remaining_days,
    })
}

pub fn statuses_json(statuses: &[ServiceDue]) -> Vec<serde_json::Value> {
    statuses.iter().map(service_due_json).collect()
}

pub fn history_json(entries: &[&HistoryEntry]) -> anyhow::Result<Vec<serde_json::Value>> {
    entries
        .iter()
        .map(|entry| serde_json::to_value(entry).map_err(Into::into))
        .collect()
}

pub fn rules_json(rules: &[Rule]) -> anyhow::Result<Vec<serde_json::Value>> {
    rules
        .iter()
        .map(|rule| {
            let mut value = serde_json::to_value(rule)?;
            if let Some(map) = value.as_object_mut() {
                map.insert("key".to_string(), serde_json::json!(rule.key()));
            }
            Ok(value)
        })
        .collect()
}
