//! Parsing and conversion helpers shared by command handlers.

mod parsing;

// Re-export public API
pub use parsing::{build_entry, build_rule, parse_date, parse_verb_list};
