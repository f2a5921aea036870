//! # Maint Core
//!
//! Core library for maint - a CLI-first vehicle maintenance tracker.
//!
//! This crate provides the maintenance data model, the service-due
//! calculation engine, and the vehicle document store, independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **model**: Car, Rule, and HistoryEntry records
//! - **status**: urgency classification enum
//! - **schedule**: due-point arithmetic and evaluation options
//! - **vehicle**: the aggregate and the service-due state machine
//! - **store**: YAML vehicle document with read-modify-write editing

pub mod error;
pub mod model;
pub mod schedule;
pub mod status;
pub mod store;
pub mod vehicle;

pub use error::{MaintError, Result};
pub use model::{Car, HistoryEntry, Rule};
pub use schedule::{ServiceDue, StatusQuery};
pub use status::Status;
pub use vehicle::{HistorySort, Vehicle};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
