//! Candidate filtering for one requirement.

use crate::models::{EmployeeCapability, Requirement, Roster};

use super::BlockedIndex;

/// Employees who may take a seat on the requirement's slot.
///
/// Checks, in order:
/// 1. team matches the requirement's filter (if any)
/// 2. capable of the service
/// 3. not blocked on (date, day-part)
/// 4. not already holding a slot on (date, day-part) in `roster`
///
/// Input order is preserved. `roster` must be the roster built so far in
/// the current run, locked assignments included.
pub fn eligible_employees<'a>(
    requirement: &Requirement,
    employees: &'a [EmployeeCapability],
    roster: &Roster,
    blocked: &BlockedIndex,
) -> Vec<&'a EmployeeCapability> {
    let team_filter = requirement.team_filter();
    employees
        .iter()
        .filter(|e| team_filter.map_or(true, |team| e.team == team))
        .filter(|e| e.is_capable_of(&requirement.service_id))
        .filter(|e| !blocked.is_blocked(&e.employee_id, &requirement.date, &requirement.day_part))
        .filter(|e| !roster.is_occupied(&e.employee_id, &requirement.date, &requirement.day_part))
        .collect()
}
