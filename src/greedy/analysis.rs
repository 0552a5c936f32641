//! Bottleneck diagnosis.
//!
//! Classifies why a requirement stayed short and proposes remediation.
//!
//! | Condition | Reason |
//! |-----------|--------|
//! | nobody capable of the service | `NoCapableEmployees` |
//! | every capable employee blocked on (date, day-part) | `AllCapableBlocked` |
//! | otherwise (booked elsewhere, team mismatch, ...) | `InsufficientEligible` |
//!
//! Team filters are ignored here: capability is judged over all employees.

use std::fmt;

use crate::models::{Bottleneck, EmployeeCapability, Requirement};

use super::BlockedIndex;

/// Root cause of an unfilled requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BottleneckReason {
    NoCapableEmployees,
    AllCapableBlocked,
    InsufficientEligible,
}

impl BottleneckReason {
    /// Human-readable reason text.
    pub fn as_str(&self) -> &'static str {
        match self {
            BottleneckReason::NoCapableEmployees => "no employees capable of this service",
            BottleneckReason::AllCapableBlocked => "all capable employees are blocked/unavailable",
            BottleneckReason::InsufficientEligible => {
                "insufficient eligible employees for this slot"
            }
        }
    }
}

impl fmt::Display for BottleneckReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnoses why `requirement` could not be filled.
pub fn diagnose(
    requirement: &Requirement,
    employees: &[EmployeeCapability],
    blocked: &BlockedIndex,
) -> BottleneckReason {
    let mut capable = employees
        .iter()
        .filter(|e| e.is_capable_of(&requirement.service_id))
        .peekable();

    if capable.peek().is_none() {
        return BottleneckReason::NoCapableEmployees;
    }

    let any_available = capable
        .any(|e| !blocked.is_blocked(&e.employee_id, &requirement.date, &requirement.day_part));
    if any_available {
        BottleneckReason::InsufficientEligible
    } else {
        BottleneckReason::AllCapableBlocked
    }
}

/// Remediation hints for a shortage, in fixed order: train, reduce, check.
pub fn suggestions(shortage: u32) -> Vec<String> {
    let mut out = Vec::with_capacity(3);
    match shortage {
        0 => {}
        1 => out.push("Train 1 more employee in this service".to_string()),
        n => out.push(format!("Train {n} more employees in this service")),
    }
    out.push(format!("Reduce requirement by {shortage}"));
    out.push("Check for scheduling conflicts".to_string());
    out
}

/// Builds a fully diagnosed bottleneck for a short requirement.
pub fn analyze(
    requirement: &Requirement,
    placed_count: u32,
    employees: &[EmployeeCapability],
    blocked: &BlockedIndex,
) -> Bottleneck {
    let bottleneck = Bottleneck::new(
        &requirement.date,
        &requirement.day_part,
        &requirement.service_id,
        requirement.required_count,
        placed_count,
    );
    let reason = diagnose(requirement, employees, blocked);
    let hints = suggestions(bottleneck.shortage);
    bottleneck.with_reason(reason.as_str()).with_suggestions(hints)
}
