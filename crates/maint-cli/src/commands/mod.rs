//! Command handlers, one module per subcommand area.

mod history;
mod init;
mod log;
mod misc;
mod rules;
mod status;
mod update_miles;

// Re-export public API
pub use history::handle_history;
pub use init::handle_init;
pub use log::{handle_delete_log, handle_edit_log, handle_log};
pub use misc::handle_completions;
pub use rules::{handle_add_rule, handle_delete_rule, handle_edit_rule, handle_rules};
pub use status::handle_status;
pub use update_miles::handle_update_miles;
