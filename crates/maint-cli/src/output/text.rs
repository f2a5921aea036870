//! Table output for status reports, history, and rules.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use maint_core::{HistoryEntry, ServiceDue, Status, StatusQuery, Vehicle};

use crate::ui::format::{
    format_cost, format_miles, format_remaining_miles, format_remaining_time, truncate,
};
use crate::ui::theme::{paint, status_color, use_color};

const NOTES_WIDTH: usize = 30;

fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    table
}

/// "2024-06-01 @ 52,000" style summary of the matched last service.
fn last_done(due: &ServiceDue) -> String {
    let mut parts = Vec::new();
    if let Some(date) = due.last_service_date {
        parts.push(date.to_string());
    }
    if let Some(miles) = due.last_service_miles {
        parts.push(format_miles(Some(miles)));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" @ ")
    }
}

fn status_table(group: &[&ServiceDue]) -> Table {
    let mut table = table(&[
        "Rule",
        "Last Done",
        "Due (mi)",
        "Due (date)",
        "Remaining (mi)",
        "Remaining (time)",
    ]);
    for due in group {
        table.add_row(vec![
            due.rule.display_name(),
            last_done(due),
            format_miles(due.due_miles),
            due.due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            format_remaining_miles(due.miles_remaining),
            format_remaining_time(due.time_remaining_days),
        ]);
    }
    table
}

/// Sort a status group by item/verb/phase for stable visual grouping.
fn sorted_group<'a>(statuses: &'a [ServiceDue], status: Status) -> Vec<&'a ServiceDue> {
    let mut group: Vec<&ServiceDue> = statuses.iter().filter(|s| s.status == status).collect();
    group.sort_by(|a, b| {
        (&a.rule.item, &a.rule.verb, &a.rule.phase).cmp(&(&b.rule.item, &b.rule.verb, &b.rule.phase))
    });
    group
}

/// Print the full grouped status report.
pub fn print_status_report(
    vehicle: &Vehicle,
    statuses: &[ServiceDue],
    query: &StatusQuery,
    quiet: bool,
) {
    let color = use_color();

    if !quiet {
        println!("Vehicle: {}", vehicle.car.name());
        println!(
            "Current mileage: {} (as of {})",
            format_miles(Some(vehicle.current_miles())),
            vehicle.as_of_date()
        );
        if query.severe {
            println!("Mode: SEVERE DRIVING (shorter intervals)");
        }
        if query.miles_only {
            println!("Filter: MILEAGE ONLY (ignoring time-based intervals)");
        }
        if query.time_only {
            println!("Filter: TIME ONLY (ignoring mileage-based intervals)");
        }
        if !query.exclude_verbs.is_empty() {
            println!("Filter: EXCLUDING VERBS: {}", query.exclude_verbs.join(", "));
        }
        println!("Rules: {}", vehicle.rules.len());
        println!("History entries: {}", vehicle.history.len());
        println!();
    }

    for status in [Status::Overdue, Status::DueSoon, Status::Ok] {
        let group = sorted_group(statuses, status);
        if group.is_empty() {
            continue;
        }
        println!(
            "{}:",
            paint(status.label(), status_color(status), color)
        );
        println!("{}", status_table(&group));
        println!();
    }

    let unknown = sorted_group(statuses, Status::Unknown);
    if !unknown.is_empty() {
        println!(
            "{} (no history):",
            paint(Status::Unknown.label(), status_color(Status::Unknown), color)
        );
        for due in unknown {
            println!("  {}", due.rule.display_name());
        }
        println!();
    }

    let inactive = sorted_group(statuses, Status::Inactive);
    if !inactive.is_empty() {
        println!(
            "{} ({} rules not applicable at current mileage):",
            paint(
                Status::Inactive.label(),
                status_color(Status::Inactive),
                color
            ),
            inactive.len()
        );
        for due in inactive {
            println!("  {}", due.rule.display_name());
        }
        println!();
    }
}

/// Print the history listing with a summary header.
pub fn print_history(vehicle: &Vehicle, entries: &[&HistoryEntry], filtered: bool, quiet: bool) {
    if !quiet {
        println!("Vehicle: {}", vehicle.car.name());
        println!(
            "Current mileage: {} (as of {})",
            format_miles(Some(vehicle.current_miles())),
            vehicle.as_of_date()
        );
        if let Some(last) = vehicle.last_service() {
            let mut info = last.date.to_string();
            if let Some(miles) = last.mileage {
                info.push_str(&format!(" @ {} mi", format_miles(Some(miles))));
            }
            println!("Last service: {}", info);
        }
        println!("Total services: {}", vehicle.history.len());
        if filtered {
            println!("Showing: {} (filtered)", entries.len());
        }
        let total_cost: f64 = entries.iter().filter_map(|entry| entry.cost).sum();
        if total_cost > 0.0 {
            println!("Total cost: {}", format_cost(Some(total_cost)));
        }
        println!();
    }

    if entries.is_empty() {
        println!("No history entries found.");
        return;
    }

    let mut table = table(&["Date", "Mileage", "Rule", "Performed By", "Cost", "Notes"]);
    for entry in entries {
        // Prefer the rule's display name, fall back to the raw key for
        // dangling entries.
        let name = vehicle
            .get_rule(&entry.rule_key)
            .map(|rule| rule.display_name())
            .unwrap_or_else(|| entry.rule_key.clone());
        table.add_row(vec![
            entry.date.to_string(),
            format_miles(entry.mileage),
            name,
            entry.performed_by.clone().unwrap_or_else(|| "-".to_string()),
            format_cost(entry.cost),
            entry
                .notes
                .as_deref()
                .map(|notes| truncate(notes, NOTES_WIDTH))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");
}

fn interval_summary(miles: Option<f64>, months: Option<f64>) -> String {
    let mut parts = Vec::new();
    if let Some(value) = miles {
        parts.push(format!("{} mi", format_miles(Some(value))));
    }
    if let Some(value) = months {
        parts.push(format!("{} mo", value));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" / ")
    }
}

/// Print the rule table sorted by item/verb/phase.
pub fn print_rules(vehicle: &Vehicle, quiet: bool) {
    if !quiet {
        println!("Vehicle: {}", vehicle.car.name());
        println!("Rules: {}", vehicle.rules.len());
        println!();
    }

    let mut rules: Vec<_> = vehicle.rules.iter().collect();
    rules.sort_by(|a, b| (&a.item, &a.verb, &a.phase).cmp(&(&b.item, &b.verb, &b.phase)));

    let mut table = table(&["Rule", "Interval", "Severe Interval"]);
    for rule in rules {
        table.add_row(vec![
            rule.display_name(),
            interval_summary(rule.interval_miles, rule.interval_months),
            interval_summary(rule.severe_interval_miles, rule.severe_interval_months),
        ]);
    }
    println!("{table}");
}
