//! Pre-existing commitments: locked assignments and unavailability.

use serde::{Deserialize, Serialize};

fn default_fixed_reason() -> String {
    "pre-planned".to_string()
}

fn default_blocked_reason() -> String {
    "sick".to_string()
}

/// A pre-planned assignment that must survive planning untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedAssignment {
    /// Assigned employee.
    pub employee_id: String,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Day-part name.
    #[serde(rename = "dagdeel")]
    pub day_part: String,
    /// Service performed.
    pub service_id: String,
    /// Why the assignment is locked.
    #[serde(default = "default_fixed_reason")]
    pub reason: String,
}

/// An employee's unavailability for one (date, day-part).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockedSlot {
    /// Unavailable employee.
    pub employee_id: String,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Day-part name.
    #[serde(rename = "dagdeel")]
    pub day_part: String,
    /// Cause (sickness, leave, training, ...).
    #[serde(default = "default_blocked_reason")]
    pub reason: String,
}

impl FixedAssignment {
    /// Creates a fixed assignment with the default reason.
    pub fn new(
        employee_id: impl Into<String>,
        date: impl Into<String>,
        day_part: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date: date.into(),
            day_part: day_part.into(),
            service_id: service_id.into(),
            reason: default_fixed_reason(),
        }
    }

    /// Sets the lock reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

impl BlockedSlot {
    /// Creates a blocked slot with the default reason.
    pub fn new(
        employee_id: impl Into<String>,
        date: impl Into<String>,
        day_part: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date: date.into(),
            day_part: day_part.into(),
            reason: default_blocked_reason(),
        }
    }

    /// Sets the cause.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}
