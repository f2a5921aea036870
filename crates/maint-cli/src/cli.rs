use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use maint_core::VERSION;

/// Maint - a CLI-first vehicle maintenance tracker
#[derive(Parser)]
#[command(name = "maint")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vehicle YAML file
    #[arg(short = 'f', long, global = true, env = "MAINT_VEHICLE")]
    pub vehicle: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the vehicle file will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Vehicle make (e.g. "Subaru")
    #[arg(long)]
    pub make: String,

    /// Vehicle model (e.g. "BRZ")
    #[arg(long)]
    pub model: String,

    /// Trim level
    #[arg(long)]
    pub trim: Option<String>,

    /// Model year
    #[arg(long)]
    pub year: i32,

    /// Purchase date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub purchase_date: String,

    /// Mileage at purchase
    #[arg(long, value_name = "MILES")]
    pub purchase_miles: f64,

    /// Current mileage (defaults to purchase mileage)
    #[arg(long, value_name = "MILES")]
    pub miles: Option<f64>,

    /// Date the current mileage was observed (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<String>,
}

/// Arguments for the `status` command
#[derive(Args)]
pub struct StatusArgs {
    /// Use severe driving intervals (shorter intervals)
    #[arg(long)]
    pub severe: bool,

    /// Only consider mileage-based intervals (ignore time)
    #[arg(long, conflicts_with = "time_only")]
    pub miles_only: bool,

    /// Only consider time-based intervals (ignore mileage)
    #[arg(long)]
    pub time_only: bool,

    /// Exclude rules with these verbs (comma-separated, e.g. "inspect,rotate")
    #[arg(long, value_name = "VERBS")]
    pub exclude_verbs: Option<String>,

    /// Distance before the due mileage that counts as due-soon
    #[arg(long, value_name = "MILES")]
    pub due_soon_miles: Option<f64>,

    /// Months before the due date that count as due-soon
    #[arg(long, value_name = "MONTHS")]
    pub due_soon_months: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Filter to rules containing text (case-insensitive, e.g. "oil")
    #[arg(long)]
    pub rule: Option<String>,

    /// Show only entries since date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// Sort order (date, miles, rule)
    #[arg(long, default_value = "date")]
    pub sort: String,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Shared fields for logging or editing a history entry
#[derive(Args)]
pub struct EntryFields {
    /// Service date (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Mileage at time of service
    #[arg(long, value_name = "MILES")]
    pub mileage: Option<f64>,

    /// Who performed the service (e.g. "self", "Dealer")
    #[arg(long)]
    pub by: Option<String>,

    /// Notes about the service
    #[arg(long)]
    pub notes: Option<String>,

    /// Cost of service
    #[arg(long)]
    pub cost: Option<f64>,
}

/// Arguments for the `log` command
#[derive(Args)]
pub struct LogArgs {
    /// Rule key (e.g. "engine oil and filter/replace")
    #[arg(value_name = "RULE_KEY")]
    pub rule_key: String,

    #[command(flatten)]
    pub entry: EntryFields,

    /// Show what would be added without saving
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `edit-log` command
#[derive(Args)]
pub struct EditLogArgs {
    /// Position of the entry in the history list (0-based)
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Rule key (e.g. "engine oil and filter/replace")
    #[arg(value_name = "RULE_KEY")]
    pub rule_key: String,

    #[command(flatten)]
    pub entry: EntryFields,

    /// Show what would be changed without saving
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `delete-log` command
#[derive(Args)]
pub struct DeleteLogArgs {
    /// Position of the entry in the history list (0-based)
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Arguments for the `update-miles` command
#[derive(Args)]
pub struct UpdateMilesArgs {
    /// Current mileage
    #[arg(value_name = "MILEAGE")]
    pub mileage: f64,

    /// Date the mileage was observed (YYYY-MM-DD, default: unchanged)
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<String>,

    /// Show what would be updated without saving
    #[arg(long)]
    pub dry_run: bool,
}

/// Shared fields describing a maintenance rule
#[derive(Args)]
pub struct RuleFields {
    /// Service subject (e.g. "engine oil and filter")
    #[arg(long)]
    pub item: String,

    /// Action (e.g. "replace", "inspect")
    #[arg(long)]
    pub verb: String,

    /// Lifecycle phase (e.g. "initial", "ongoing")
    #[arg(long)]
    pub phase: Option<String>,

    /// Mileage interval
    #[arg(long, value_name = "MILES")]
    pub interval_miles: Option<f64>,

    /// Time interval in months (may be fractional)
    #[arg(long, value_name = "MONTHS")]
    pub interval_months: Option<f64>,

    /// Mileage interval under severe driving
    #[arg(long, value_name = "MILES")]
    pub severe_interval_miles: Option<f64>,

    /// Time interval in months under severe driving
    #[arg(long, value_name = "MONTHS")]
    pub severe_interval_months: Option<f64>,

    /// Notes about the rule
    #[arg(long)]
    pub notes: Option<String>,

    /// Mileage at which the rule starts to apply
    #[arg(long, value_name = "MILES")]
    pub start_miles: Option<f64>,

    /// Mileage at which the rule stops applying
    #[arg(long, value_name = "MILES")]
    pub stop_miles: Option<f64>,

    /// Month at which the rule starts to apply
    #[arg(long, value_name = "MONTHS")]
    pub start_months: Option<f64>,

    /// Month at which the rule stops applying
    #[arg(long, value_name = "MONTHS")]
    pub stop_months: Option<f64>,

    /// Mark the rule as covering an aftermarket part
    #[arg(long)]
    pub aftermarket: bool,
}

/// Arguments for the `add-rule` command
#[derive(Args)]
pub struct AddRuleArgs {
    #[command(flatten)]
    pub rule: RuleFields,
}

/// Arguments for the `edit-rule` command
#[derive(Args)]
pub struct EditRuleArgs {
    /// Position of the rule in the rule list (0-based)
    #[arg(value_name = "INDEX")]
    pub index: usize,

    #[command(flatten)]
    pub rule: RuleFields,
}

/// Arguments for the `delete-rule` command
#[derive(Args)]
pub struct DeleteRuleArgs {
    /// Position of the rule in the rule list (0-based)
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Arguments for the `rules` command
#[derive(Args)]
pub struct RulesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new vehicle file
    Init(InitArgs),

    /// Show what maintenance is due, overdue, or upcoming
    Status(StatusArgs),

    /// View service history
    History(HistoryArgs),

    /// Add a new service entry
    Log(LogArgs),

    /// Replace a service entry by index
    EditLog(EditLogArgs),

    /// Remove a service entry by index
    DeleteLog(DeleteLogArgs),

    /// Update current vehicle mileage
    UpdateMiles(UpdateMilesArgs),

    /// List available maintenance rules
    Rules(RulesArgs),

    /// Add a maintenance rule
    AddRule(AddRuleArgs),

    /// Replace a maintenance rule by index
    EditRule(EditRuleArgs),

    /// Remove a maintenance rule by index
    DeleteRule(DeleteRuleArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
