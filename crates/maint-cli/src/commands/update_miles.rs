use maint_core::store::save_doc;

use crate::app::AppContext;
use crate::cli::UpdateMilesArgs;
use crate::helpers::parse_date;
use crate::ui::format::format_miles;

pub fn handle_update_miles(ctx: &AppContext, args: &UpdateMilesArgs) -> anyhow::Result<()> {
    let (path, mut doc) = ctx.load_doc()?;
    let old_miles = doc.to_vehicle().current_miles();
    let as_of = args.as_of.as_deref().map(parse_date).transpose()?;

    if !ctx.quiet() {
        println!("Vehicle: {}", doc.car.name());
        println!("Current mileage: {}", format_miles(Some(old_miles)));
        println!("New mileage:     {}", format_miles(Some(args.mileage)));
        if let Some(date) = as_of {
            println!("As of:           {}", date);
        }
        println!();
    }

    if args.dry_run {
        println!("(dry run - no changes made)");
        return Ok(());
    }

    doc.set_current_miles(args.mileage);
    if let Some(date) = as_of {
        doc.set_as_of_date(date);
    }
    save_doc(&path, &doc)?;
    if !ctx.quiet() {
        println!("Mileage updated.");
    }
    Ok(())
}
