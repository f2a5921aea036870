use std::path::PathBuf;

use maint_core::model::Car;
use maint_core::store::create_vehicle;

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::helpers::parse_date;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let path = match args.path {
        Some(ref path) => PathBuf::from(path),
        None => ctx.vehicle_path()?,
    };

    let car = Car {
        make: args.make.clone(),
        model: args.model.clone(),
        trim: args.trim.clone(),
        year: args.year,
        purchase_date: parse_date(&args.purchase_date)?,
        purchase_miles: args.purchase_miles,
    };
    let as_of = args.as_of.as_deref().map(parse_date).transpose()?;

    create_vehicle(&path, car, args.miles, as_of)?;

    if !ctx.quiet() {
        println!("Initialized vehicle file at {}", path.display());
    }
    Ok(())
}
