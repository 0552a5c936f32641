//! Roster (solution) model.
//!
//! A roster is the ordered list of assignments produced by one planning
//! run. It keeps two indexes next to the list so the planner never has to
//! rescan it:
//! - occupied (employee, date, day-part) triples
//! - assignment count per (date, day-part, service) slot
//!
//! Both are updated on every [`Roster::push`], so they always reflect the
//! list exactly.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Where an assignment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentSource {
    /// Converted from a [`FixedAssignment`](super::FixedAssignment).
    #[serde(rename = "pre-planned")]
    PrePlanned,
    /// Placed by the greedy allocator.
    #[serde(rename = "greedy")]
    Greedy,
}

/// One employee on one (date, day-part, service) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Deterministic identifier derived from the slot and employee.
    pub assignment_id: String,
    /// Assigned employee.
    pub employee_id: String,
    /// Calendar date.
    pub date: String,
    /// Day-part name.
    #[serde(rename = "dagdeel")]
    pub day_part: String,
    /// Service performed.
    pub service_id: String,
    /// Origin of the assignment.
    pub source: AssignmentSource,
    /// Locked assignments are never altered by the planner.
    pub is_locked: bool,
}

impl Assignment {
    /// Creates a locked assignment from a pre-planned commitment.
    ///
    /// ID format: `{employee}_{date}_{day_part}`.
    pub fn locked(
        employee_id: impl Into<String>,
        date: impl Into<String>,
        day_part: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        let (employee_id, date, day_part) = (employee_id.into(), date.into(), day_part.into());
        Self {
            assignment_id: format!("{employee_id}_{date}_{day_part}"),
            employee_id,
            date,
            day_part,
            service_id: service_id.into(),
            source: AssignmentSource::PrePlanned,
            is_locked: true,
        }
    }

    /// Creates an unlocked assignment placed by the allocator.
    ///
    /// ID format: `{employee}_{date}_{day_part}_{service}`.
    pub fn greedy(
        employee_id: impl Into<String>,
        date: impl Into<String>,
        day_part: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        let (employee_id, date, day_part, service_id) = (
            employee_id.into(),
            date.into(),
            day_part.into(),
            service_id.into(),
        );
        Self {
            assignment_id: format!("{employee_id}_{date}_{day_part}_{service_id}"),
            employee_id,
            date,
            day_part,
            service_id,
            source: AssignmentSource::Greedy,
            is_locked: false,
        }
    }
}

type WorkerKey = (String, String, String);
type SlotKey = (String, String, String);

fn worker_key(employee_id: &str, date: &str, day_part: &str) -> WorkerKey {
    (employee_id.to_string(), date.to_string(), day_part.to_string())
}

fn slot_key(date: &str, day_part: &str, service_id: &str) -> SlotKey {
    (date.to_string(), day_part.to_string(), service_id.to_string())
}

/// Ordered assignments with incremental occupancy indexes.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    assignments: Vec<Assignment>,
    occupied: HashSet<WorkerKey>,
    slot_counts: HashMap<SlotKey, u32>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    ///
    /// Returns `false` (and leaves the roster unchanged) if the employee
    /// already holds a slot on that date and day-part.
    pub fn push(&mut self, assignment: Assignment) -> bool {
        let key = worker_key(
            &assignment.employee_id,
            &assignment.date,
            &assignment.day_part,
        );
        if !self.occupied.insert(key) {
            return false;
        }
        *self
            .slot_counts
            .entry(slot_key(
                &assignment.date,
                &assignment.day_part,
                &assignment.service_id,
            ))
            .or_insert(0) += 1;
        self.assignments.push(assignment);
        true
    }

    /// Whether the employee already holds a slot on this date and day-part.
    pub fn is_occupied(&self, employee_id: &str, date: &str, day_part: &str) -> bool {
        self.occupied
            .contains(&worker_key(employee_id, date, day_part))
    }

    /// Number of assignments covering a (date, day-part, service) slot.
    pub fn count_for_slot(&self, date: &str, day_part: &str, service_id: &str) -> u32 {
        self.slot_counts
            .get(&slot_key(date, day_part, service_id))
            .copied()
            .unwrap_or(0)
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Consumes the roster, returning the ordered assignments.
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }
}
