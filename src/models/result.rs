//! Planning result (report) model.

use serde::{Deserialize, Serialize};

use super::{Assignment, Bottleneck};

/// Version tag stamped on every result.
pub const ENGINE_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-greedy");

/// Local time as ISO-8601 with microseconds, e.g. `2024-01-01T08:30:00.123456`.
pub fn local_timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Output of one planning run.
///
/// Apart from `timestamp` and `solve_time_seconds`, identical inputs
/// always produce an identical result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosteringResult {
    /// Assignments in commit order: locked first, then greedy.
    pub roster: Vec<Assignment>,
    /// Unfilled requirements, in requirement order.
    pub bottlenecks: Vec<Bottleneck>,
    /// Percentage of requirements fully staffed (0-100).
    pub coverage_rate: f64,
    /// Number of requirement entries.
    pub total_slots: usize,
    /// Requirement entries without a bottleneck.
    pub assigned_slots: usize,
    /// Wall-clock time spent in allocation.
    pub solve_time_seconds: f64,
    pub timestamp: String,
    pub version: String,
}

impl RosteringResult {
    /// Number of locked assignments in the roster.
    pub fn locked_count(&self) -> usize {
        self.roster.iter().filter(|a| a.is_locked).count()
    }

    /// Whether every requirement was fully staffed.
    pub fn is_fully_covered(&self) -> bool {
        self.bottlenecks.is_empty()
    }
}
