//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying status
//! reports, history, and rules in table and JSON form.

mod json;
mod text;

// Re-export public API
pub use json::{history_json, rules_json, service_due_json, statuses_json};
pub use text::{print_history, print_rules, print_status_report};
