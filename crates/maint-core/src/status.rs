//! Maintenance urgency classification.

use serde::{Deserialize, Serialize};

/// Service status categories, declared most-urgent first.
///
/// The derived `Ord` follows declaration order, so `Status::Overdue` compares
/// less than `Status::DueSoon` and so on. Escalation between the mileage and
/// time axes picks the smaller (more urgent) of the two classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Overdue,
    DueSoon,
    Ok,
    /// Rule does not apply at the current mileage (outside its window)
    Inactive,
    /// Cannot calculate (no interval data, or time-only with no history)
    Unknown,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::Ok => "ok",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }

    /// Human-facing label used in report headings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overdue => "OVERDUE",
            Self::DueSoon => "DUE SOON",
            Self::Ok => "OK",
            Self::Inactive => "INACTIVE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
