//! Service-entry commands: log, edit-log, delete-log.

use maint_core::model::{HistoryEntry, Rule};
use maint_core::store::save_doc;
use maint_core::Vehicle;

use crate::app::AppContext;
use crate::cli::{DeleteLogArgs, EditLogArgs, EntryFields, LogArgs};
use crate::helpers::build_entry;
use crate::ui::format::{format_cost, format_miles};

/// Resolve a rule by key, case-insensitively. An unknown key fails with
/// the full rule list so the user can pick the right one.
fn resolve_rule<'a>(vehicle: &'a Vehicle, rule_key: &str) -> anyhow::Result<&'a Rule> {
    let normalized = rule_key.to_lowercase();
    if let Some(rule) = vehicle
        .rules
        .iter()
        .find(|rule| rule.key().to_lowercase() == normalized)
    {
        return Ok(rule);
    }

    let mut sorted: Vec<&Rule> = vehicle.rules.iter().collect();
    sorted.sort_by(|a, b| (&a.item, &a.verb, &a.phase).cmp(&(&b.item, &b.verb, &b.phase)));
    let mut message = format!("Unknown rule key \"{}\"\n\nAvailable rules:", rule_key);
    for rule in sorted {
        message.push_str(&format!(
            "\n  {}\n    Key: {}",
            rule.display_name(),
            rule.key()
        ));
    }
    Err(anyhow::anyhow!(message))
}

fn print_entry_preview(rule: &Rule, entry: &HistoryEntry) {
    println!("  Rule:    {}", rule.display_name());
    println!("  Date:    {}", entry.date);
    if entry.mileage.is_some() {
        println!("  Mileage: {}", format_miles(entry.mileage));
    }
    if let Some(ref by) = entry.performed_by {
        println!("  By:      {}", by);
    }
    if let Some(ref notes) = entry.notes {
        println!("  Notes:   {}", notes);
    }
    if entry.cost.is_some() {
        println!("  Cost:    {}", format_cost(entry.cost));
    }
}

/// Build an entry carrying the canonical key of the matched rule.
fn entry_for_rule<'a>(
    vehicle: &'a Vehicle,
    rule_key: &str,
    fields: &EntryFields,
) -> anyhow::Result<(&'a Rule, HistoryEntry)> {
    let rule = resolve_rule(vehicle, rule_key)?;
    let entry = build_entry(rule.key(), fields)?;
    Ok((rule, entry))
}

pub fn handle_log(ctx: &AppContext, args: &LogArgs) -> anyhow::Result<()> {
    let (path, mut doc) = ctx.load_doc()?;
    let vehicle = doc.to_vehicle();
    let (rule, entry) = entry_for_rule(&vehicle, &args.rule_key, &args.entry)?;

    if !ctx.quiet() {
        println!("Adding service entry to {}:", path.display());
        print_entry_preview(rule, &entry);
        println!();
    }

    if args.dry_run {
        println!("(dry run - no changes made)");
        return Ok(());
    }

    doc.push_history(entry);
    save_doc(&path, &doc)?;
    if !ctx.quiet() {
        println!("Entry saved.");
    }
    Ok(())
}

pub fn handle_edit_log(ctx: &AppContext, args: &EditLogArgs) -> anyhow::Result<()> {
    let (path, mut doc) = ctx.load_doc()?;
    let vehicle = doc.to_vehicle();
    let (rule, entry) = entry_for_rule(&vehicle, &args.rule_key, &args.entry)?;

    if !ctx.quiet() {
        println!("Replacing history entry {} in {}:", args.index, path.display());
        print_entry_preview(rule, &entry);
        println!();
    }

    if args.dry_run {
        println!("(dry run - no changes made)");
        return Ok(());
    }

    doc.replace_history(args.index, entry)?;
    save_doc(&path, &doc)?;
    if !ctx.quiet() {
        println!("Entry {} updated.", args.index);
    }
    Ok(())
}

pub fn handle_delete_log(ctx: &AppContext, args: &DeleteLogArgs) -> anyhow::Result<()> {
    let (path, mut doc) = ctx.load_doc()?;
    let removed = doc.remove_history(args.index)?;
    save_doc(&path, &doc)?;
    if !ctx.quiet() {
        println!("Removed entry {} ({} on {}).", args.index, removed.rule_key, removed.date);
    }
    Ok(())
}
