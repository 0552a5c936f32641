//! Greedy shift allocation.
//!
//! Provides the building blocks of the greedy strategy and the planner
//! that drives them.
//!
//! # Components
//!
//! - `BlockedIndex`: O(1) unavailability lookups
//! - `WorkloadTracker`: running per-employee load, the candidate sort key
//! - `eligible_employees`: candidate filtering for one requirement
//! - `analysis`: bottleneck root cause and remediation hints
//! - `CoverageKpi`: coverage statistics
//! - `GreedyPlanner`: lock-then-fill allocation loop
//!
//! The planner is a single-pass heuristic. It balances load but does not
//! minimise shortage; there is no backtracking or improvement phase.

pub mod analysis;
mod blocked;
mod eligibility;
mod kpi;
mod planner;
mod workload;

pub use analysis::BottleneckReason;
pub use blocked::BlockedIndex;
pub use eligibility::eligible_employees;
pub use kpi::CoverageKpi;
pub use planner::GreedyPlanner;
pub use workload::WorkloadTracker;
