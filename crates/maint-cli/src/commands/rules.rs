//! Rule commands: rules, add-rule, edit-rule, delete-rule.

use maint_core::store::save_doc;

use crate::app::AppContext;
use crate::cli::{AddRuleArgs, DeleteRuleArgs, EditRuleArgs, RulesArgs};
use crate::helpers::build_rule;
use crate::output::{print_rules, rules_json};

pub fn handle_rules(ctx: &AppContext, args: &RulesArgs) -> anyhow::Result<()> {
    let vehicle = ctx.load_vehicle()?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rules_json(&vehicle.rules)?)?
        );
    } else {
        print_rules(&vehicle, ctx.quiet());
    }
    Ok(())
}

pub fn handle_add_rule(ctx: &AppContext, args: &AddRuleArgs) -> anyhow::Result<()> {
    let (path, mut doc) = ctx.load_doc()?;
    let rule = build_rule(&args.rule);
    let key = rule.key();
    doc.push_rule(rule);
    save_doc(&path, &doc)?;
    if !ctx.quiet() {
        println!("Added rule {}", key);
    }
    Ok(())
}

pub fn handle_edit_rule(ctx: &AppContext, args: &EditRuleArgs) -> anyhow::Result<()> {
    let (path, mut doc) = ctx.load_doc()?;
    let rule = build_rule(&args.rule);
    let key = rule.key();
    doc.replace_rule(args.index, rule)?;
    save_doc(&path, &doc)?;
    if !ctx.quiet() {
        println!("Rule {} is now {}", args.index, key);
    }
    Ok(())
}

pub fn handle_delete_rule(ctx: &AppContext, args: &DeleteRuleArgs) -> anyhow::Result<()> {
    let (path, mut doc) = ctx.load_doc()?;
    let removed = doc.remove_rule(args.index)?;
    save_doc(&path, &doc)?;
    if !ctx.quiet() {
        println!("Removed rule {} ({}).", args.index, removed.key());
    }
    Ok(())
}
