use maint_core::StatusQuery;

use crate::app::AppContext;
use crate::cli::StatusArgs;
use crate::helpers::parse_verb_list;
use crate::output::{print_status_report, statuses_json};

pub fn handle_status(ctx: &AppContext, args: &StatusArgs) -> anyhow::Result<()> {
    let vehicle = ctx.load_vehicle()?;

    let mut query = StatusQuery::new()
        .due_soon_miles(ctx.due_soon_miles(args.due_soon_miles)?)
        .due_soon_months(ctx.due_soon_months(args.due_soon_months)?)
        .severe(args.severe);
    if args.miles_only {
        query = query.miles_only();
    }
    if args.time_only {
        query = query.time_only();
    }
    if let Some(ref verbs) = args.exclude_verbs {
        query = query.exclude_verbs(parse_verb_list(verbs));
    }

    let statuses = vehicle.get_all_service_status(&query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&statuses_json(&statuses))?);
    } else {
        print_status_report(&vehicle, &statuses, &query, ctx.quiet());
    }
    Ok(())
}
