//! Maint CLI - a CLI-first vehicle maintenance tracker
//!
//! This is the command-line interface for maint. It loads a vehicle YAML
//! file, runs the service-due calculation engine from `maint-core`, and
//! renders the results.

use clap::Parser;

use maint_core::VERSION;

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;
mod ui;

use app::AppContext;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match cli.command {
        Some(Commands::Init(ref args)) => commands::handle_init(&ctx, args),
        Some(Commands::Status(ref args)) => commands::handle_status(&ctx, args),
        Some(Commands::History(ref args)) => commands::handle_history(&ctx, args),
        Some(Commands::Log(ref args)) => commands::handle_log(&ctx, args),
        Some(Commands::EditLog(ref args)) => commands::handle_edit_log(&ctx, args),
        Some(Commands::DeleteLog(ref args)) => commands::handle_delete_log(&ctx, args),
        Some(Commands::UpdateMiles(ref args)) => commands::handle_update_miles(&ctx, args),
        Some(Commands::Rules(ref args)) => commands::handle_rules(&ctx, args),
        Some(Commands::AddRule(ref args)) => commands::handle_add_rule(&ctx, args),
        Some(Commands::EditRule(ref args)) => commands::handle_edit_rule(&ctx, args),
        Some(Commands::DeleteRule(ref args)) => commands::handle_delete_rule(&ctx, args),
        Some(Commands::Completions { shell }) => commands::handle_completions(shell),
        None => {
            println!("Maint v{}", VERSION);
            println!("\nRun `maint --help` for usage information.");
            Ok(())
        }
    }
}
