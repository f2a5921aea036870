//! Application-level utilities for the maint CLI.
//!
//! This module provides:
//! - Vehicle path resolution (flag, environment, config file)
//! - Lazily-loaded configuration bundled with CLI arguments

mod context;

// Re-export public API
pub use context::AppContext;
