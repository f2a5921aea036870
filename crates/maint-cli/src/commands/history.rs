use maint_core::HistorySort;

use crate::app::AppContext;
use crate::cli::HistoryArgs;
use crate::helpers::parse_date;
use crate::output::{history_json, print_history};

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let vehicle = ctx.load_vehicle()?;
    let sort: HistorySort = args.sort.parse()?;

    let mut entries = vehicle.get_history_sorted(sort, !args.asc);

    if let Some(ref needle) = args.rule {
        let needle = needle.to_lowercase();
        entries.retain(|entry| entry.rule_key.to_lowercase().contains(&needle));
    }
    if let Some(ref since) = args.since {
        let since = parse_date(since)?;
        entries.retain(|entry| entry.date >= since);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&history_json(&entries)?)?);
    } else {
        let filtered = args.rule.is_some() || args.since.is_some();
        print_history(&vehicle, &entries, filtered, ctx.quiet());
    }
    Ok(())
}
