//! Per-employee workload counter.

use std::collections::HashMap;

use crate::models::EmployeeCapability;

/// Running assignment count per employee within one planning run.
///
/// Used only as a sort key: candidates are ordered by ascending load,
/// ties keep their discovery order.
#[derive(Debug, Clone, Default)]
pub struct WorkloadTracker {
    counts: HashMap<String, u32>,
}

impl WorkloadTracker {
    /// Starts every known employee at zero.
    pub fn new(employees: &[EmployeeCapability]) -> Self {
        let counts = employees
            .iter()
            .map(|e| (e.employee_id.clone(), 0))
            .collect();
        Self { counts }
    }

    /// Current load (0 for unknown employees).
    pub fn load(&self, employee_id: &str) -> u32 {
        self.counts.get(employee_id).copied().unwrap_or(0)
    }

    /// Records one more assignment.
    pub fn increment(&mut self, employee_id: &str) {
        *self.counts.entry(employee_id.to_string()).or_insert(0) += 1;
    }

    /// Stable sort, least-loaded first.
    pub fn sort_least_loaded(&self, candidates: &mut [&EmployeeCapability]) {
        candidates.sort_by_key(|e| self.load(&e.employee_id));
    }
}
