//! Solver strategies.
//!
//! `SolverStrategy` is a closed set. Names are resolved with one explicit
//! rule: anything unrecognised selects `Greedy`. `SolverSelector` runs the
//! chosen strategy and wraps the outcome in a `SolverResponse`, the same
//! envelope for solved and not-implemented outcomes.

mod selector;
mod strategy;

pub use selector::{SolveSummary, SolverResponse, SolverSelector};
pub use strategy::SolverStrategy;
