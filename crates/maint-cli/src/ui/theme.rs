//! Color definitions and status styling.

use std::io::IsTerminal;

use maint_core::Status;

/// Color definitions using ANSI escape codes.
pub mod colors {
    /// Dim text (for labels, metadata)
    pub const DIM: &str = "\x1b[2m";
    /// Green (nothing due)
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow (due soon)
    pub const YELLOW: &str = "\x1b[33m";
    /// Red (overdue)
    pub const RED: &str = "\x1b[31m";
    /// Cyan (unknown)
    pub const CYAN: &str = "\x1b[36m";
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";
}

/// Color for a status heading.
pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Overdue => colors::RED,
        Status::DueSoon => colors::YELLOW,
        Status::Ok => colors::GREEN,
        Status::Inactive => colors::DIM,
        Status::Unknown => colors::CYAN,
    }
}

/// Wrap text in a color when coloring is enabled.
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, colors::RESET)
    } else {
        text.to_string()
    }
}

/// Whether stdout should receive colors (terminal, NO_COLOR unset).
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
