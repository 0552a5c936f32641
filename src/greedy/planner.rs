//! Workload-balanced greedy roster planner.
//!
//! # Algorithm
//!
//! 1. Lock pre-planned assignments. A fixed assignment is kept only if the
//!    employee exists, is capable of the service, is not blocked, and does
//!    not already hold a lock on that (date, day-part). Invalid ones are
//!    dropped without raising a bottleneck.
//! 2. For each requirement, in input order:
//!    - count assignments already on the slot (locks and earlier commits)
//!    - if short, collect eligible employees, stable-sort them by current
//!      workload (least-loaded first) and commit up to the shortage
//!    - if still short, record a diagnosed bottleneck
//! 3. Aggregate coverage.
//!
//! Single pass: nothing committed is ever undone or exchanged, so the
//! requirement order determines the outcome.
//!
//! # Complexity
//! O(r * e) where r=requirements, e=employees. Slot counts and occupancy
//! are indexed in the [`Roster`], so no step rescans the roster.

use std::time::Instant;

use tracing::{debug, info};

use crate::input::SolveRequest;
use crate::models::{
    local_timestamp, Assignment, BlockedSlot, Bottleneck, EmployeeCapability, FixedAssignment,
    Requirement, Roster, RosteringResult, ENGINE_VERSION,
};

use super::{analysis, eligible_employees, BlockedIndex, CoverageKpi, WorkloadTracker};

/// Greedy planner.
///
/// Stateless: each call to [`solve`](Self::solve) owns its roster,
/// bottleneck list and workload counters.
///
/// # Example
///
/// ```
/// use u_roster::greedy::GreedyPlanner;
/// use u_roster::models::{EmployeeCapability, Requirement};
///
/// let requirements = vec![Requirement::new("2024-01-01", "ochtend", "S1", 1)];
/// let employees = vec![EmployeeCapability::new("E1").with_service("S1")];
///
/// let result = GreedyPlanner::new().solve(&requirements, &employees, &[], &[]);
/// assert_eq!(result.roster.len(), 1);
/// assert!((result.coverage_rate - 100.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner;

impl GreedyPlanner {
    /// Creates a planner.
    pub fn new() -> Self {
        Self
    }

    /// Builds a roster.
    pub fn solve(
        &self,
        requirements: &[Requirement],
        employees: &[EmployeeCapability],
        fixed_assignments: &[FixedAssignment],
        blocked_slots: &[BlockedSlot],
    ) -> RosteringResult {
        let started = Instant::now();
        info!(
            requirements = requirements.len(),
            employees = employees.len(),
            "Starting roster generation"
        );

        let blocked = BlockedIndex::build(blocked_slots);
        debug!(blocked = blocked.len(), "Unavailability index built");
        let mut workload = WorkloadTracker::new(employees);
        let mut roster = Roster::new();

        let locked = self.lock_fixed(
            fixed_assignments,
            employees,
            &blocked,
            &mut roster,
            &mut workload,
        );
        info!(
            locked,
            dropped = fixed_assignments.len() - locked,
            "Pre-planned assignments locked"
        );

        let bottlenecks =
            self.fill(requirements, employees, &blocked, &mut roster, &mut workload);
        info!(
            assignments = roster.len(),
            bottlenecks = bottlenecks.len(),
            "Greedy allocation complete"
        );

        let elapsed = started.elapsed().as_secs_f64();
        let kpi = CoverageKpi::calculate(requirements.len(), &bottlenecks);
        info!(
            coverage_rate = kpi.coverage_rate,
            solve_time_seconds = elapsed,
            "Roster generation finished"
        );

        RosteringResult {
            roster: roster.into_assignments(),
            bottlenecks,
            coverage_rate: kpi.coverage_rate,
            total_slots: kpi.total_slots,
            assigned_slots: kpi.assigned_slots,
            solve_time_seconds: elapsed,
            timestamp: local_timestamp(),
            version: ENGINE_VERSION.to_string(),
        }
    }

    /// Builds a roster from a decoded request.
    pub fn solve_request(&self, request: &SolveRequest) -> RosteringResult {
        self.solve(
            &request.requirements,
            &request.employees,
            &request.fixed_assignments,
            &request.blocked_slots,
        )
    }

    /// Phase 1. Returns the number of locks placed.
    fn lock_fixed(
        &self,
        fixed_assignments: &[FixedAssignment],
        employees: &[EmployeeCapability],
        blocked: &BlockedIndex,
        roster: &mut Roster,
        workload: &mut WorkloadTracker,
    ) -> usize {
        let mut locked = 0;
        for fixed in fixed_assignments {
            if !is_valid_fixed(fixed, employees, blocked) {
                debug!(
                    employee = %fixed.employee_id,
                    date = %fixed.date,
                    day_part = %fixed.day_part,
                    service = %fixed.service_id,
                    "Dropping invalid pre-planned assignment"
                );
                continue;
            }

            let assignment = Assignment::locked(
                &fixed.employee_id,
                &fixed.date,
                &fixed.day_part,
                &fixed.service_id,
            );
            if roster.push(assignment) {
                workload.increment(&fixed.employee_id);
                locked += 1;
            } else {
                debug!(
                    employee = %fixed.employee_id,
                    date = %fixed.date,
                    day_part = %fixed.day_part,
                    "Dropping pre-planned assignment for an already locked day-part"
                );
            }
        }
        locked
    }

    /// Phase 2. Returns bottlenecks in requirement order.
    fn fill(
        &self,
        requirements: &[Requirement],
        employees: &[EmployeeCapability],
        blocked: &BlockedIndex,
        roster: &mut Roster,
        workload: &mut WorkloadTracker,
    ) -> Vec<Bottleneck> {
        let mut bottlenecks = Vec::new();

        for req in requirements {
            let current = roster.count_for_slot(&req.date, &req.day_part, &req.service_id);
            if current >= req.required_count {
                continue;
            }
            let shortage = req.required_count - current;

            let mut candidates = eligible_employees(req, employees, roster, blocked);
            workload.sort_least_loaded(&mut candidates);

            let mut placed = 0;
            for employee in candidates {
                if placed >= shortage {
                    break;
                }
                let assignment = Assignment::greedy(
                    &employee.employee_id,
                    &req.date,
                    &req.day_part,
                    &req.service_id,
                );
                // Duplicate employee IDs in the input would otherwise double-book
                if roster.push(assignment) {
                    workload.increment(&employee.employee_id);
                    placed += 1;
                }
            }

            if placed < shortage {
                let bottleneck = analysis::analyze(req, current + placed, employees, blocked);
                debug!(
                    date = %req.date,
                    day_part = %req.day_part,
                    service = %req.service_id,
                    shortage = bottleneck.shortage,
                    reason = %bottleneck.reason,
                    "Requirement left short"
                );
                bottlenecks.push(bottleneck);
            }
        }

        bottlenecks
    }
}

/// Capability, existence and availability check for a fixed assignment.
fn is_valid_fixed(
    fixed: &FixedAssignment,
    employees: &[EmployeeCapability],
    blocked: &BlockedIndex,
) -> bool {
    if blocked.is_blocked(&fixed.employee_id, &fixed.date, &fixed.day_part) {
        return false;
    }
    employees
        .iter()
        .find(|e| e.employee_id == fixed.employee_id)
        .is_some_and(|e| e.is_capable_of(&fixed.service_id))
}
