//! Strategy dispatch and the response envelope.

use serde::Serialize;
use tracing::info;

use super::SolverStrategy;
use crate::error::InputError;
use crate::greedy::GreedyPlanner;
use crate::input::SolveRequest;
use crate::models::RosteringResult;

/// Outcome of a solve call, shared by all strategies.
///
/// Success carries the result plus headline figures; a strategy that is
/// not implemented carries `success: false` and an error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverResponse {
    pub success: bool,
    pub solver: SolverStrategy,
    #[serde(flatten)]
    pub summary: Option<SolveSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result payload of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveSummary {
    pub result: RosteringResult,
    pub coverage_rate: f64,
    pub solve_time_seconds: f64,
    pub assignments_count: usize,
    pub bottlenecks_count: usize,
}

impl SolverResponse {
    /// Wraps a finished result.
    pub fn solved(solver: SolverStrategy, result: RosteringResult) -> Self {
        let summary = SolveSummary {
            coverage_rate: result.coverage_rate,
            solve_time_seconds: result.solve_time_seconds,
            assignments_count: result.roster.len(),
            bottlenecks_count: result.bottlenecks.len(),
            result,
        };
        Self {
            success: true,
            solver,
            summary: Some(summary),
            error: None,
        }
    }

    /// Response for a strategy that has no implementation.
    pub fn not_implemented(solver: SolverStrategy) -> Self {
        Self {
            success: false,
            solver,
            summary: None,
            error: Some(format!(
                "{} solver not yet implemented",
                solver.display_name()
            )),
        }
    }

    /// The rostering result, if the solve succeeded.
    pub fn result(&self) -> Option<&RosteringResult> {
        self.summary.as_ref().map(|s| &s.result)
    }
}

/// Runs the configured strategy.
///
/// # Example
///
/// ```
/// use u_roster::solver::{SolverSelector, SolverStrategy};
/// use u_roster::input::SolveRequest;
///
/// let selector = SolverSelector::from_name("unknown");
/// assert_eq!(selector.strategy(), SolverStrategy::Greedy);
///
/// let response = selector.solve(&SolveRequest::default());
/// assert!(response.success);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverSelector {
    strategy: SolverStrategy,
}

impl SolverSelector {
    /// Creates a selector for a strategy.
    pub fn new(strategy: SolverStrategy) -> Self {
        info!(strategy = %strategy, "Solver initialized");
        Self { strategy }
    }

    /// Creates a selector from a configured name.
    ///
    /// Unrecognised names select `Greedy` (see [`SolverStrategy::resolve`]).
    pub fn from_name(name: &str) -> Self {
        Self::new(SolverStrategy::resolve(name))
    }

    /// Selected strategy.
    pub fn strategy(&self) -> SolverStrategy {
        self.strategy
    }

    /// Solves a decoded request.
    pub fn solve(&self, request: &SolveRequest) -> SolverResponse {
        info!(
            primary = self.strategy.label(),
            fallback = self.strategy.fallback().map(|s| s.label()).unwrap_or("none"),
            "Executing solver"
        );
        match self.strategy {
            SolverStrategy::Greedy => {
                let result = GreedyPlanner::new().solve_request(request);
                SolverResponse::solved(self.strategy, result)
            }
            SolverStrategy::Sequential | SolverStrategy::CpSat => {
                info!(solver = self.strategy.label(), "Solver not yet implemented");
                SolverResponse::not_implemented(self.strategy)
            }
        }
    }

    /// Decodes and solves a JSON request document.
    ///
    /// Placeholder strategies answer without decoding the body. For the
    /// greedy strategy a malformed document fails the whole call.
    pub fn solve_json(&self, body: &str) -> Result<SolverResponse, InputError> {
        if !self.strategy.is_implemented() {
            return Ok(SolverResponse::not_implemented(self.strategy));
        }
        let request = SolveRequest::from_json(body)?;
        Ok(self.solve(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> String {
        json!({
            "requirements": [
                {"date": "2024-01-01", "dagdeel": "ochtend", "service_id": "S", "required_count": 2}
            ],
            "employees": [
                {"employee_id": "E1", "voornaam": "A", "achternaam": "B", "capable_services": {"S": true}}
            ]
        })
        .to_string()
    }

    #[test]
    fn test_greedy_envelope() {
        let response = SolverSelector::new(SolverStrategy::Greedy)
            .solve_json(&body())
            .unwrap();
        assert!(response.success);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["solver"], "GREEDY");
        assert_eq!(json["assignments_count"], 1);
        assert_eq!(json["bottlenecks_count"], 1);
        assert_eq!(json["coverage_rate"], 0.0);
        assert_eq!(json["result"]["bottlenecks"][0]["shortage"], 1);
        assert_eq!(json["result"]["roster"][0]["source"], "greedy");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_placeholders_skip_allocation() {
        for strategy in [SolverStrategy::Sequential, SolverStrategy::CpSat] {
            // Malformed body is never decoded
            let response = SolverSelector::new(strategy).solve_json("{ not json").unwrap();
            assert!(!response.success);
            assert!(response.result().is_none());
            let json = serde_json::to_value(&response).unwrap();
            assert_eq!(json["solver"], strategy.label());
            assert!(json.get("result").is_none());
        }
        let response = SolverSelector::new(SolverStrategy::CpSat).solve(&SolveRequest::default());
        assert_eq!(
            response.error.as_deref(),
            Some("CP-SAT solver not yet implemented")
        );
    }

    #[test]
    fn test_malformed_input_fails() {
        let selector = SolverSelector::default();
        let err = selector
            .solve_json(r#"{"employees": [{"employee_id": "E1"}]}"#)
            .unwrap_err();
        assert_eq!(err.list(), Some("employees"));
    }

    #[test]
    fn test_unknown_name_uses_greedy() {
        let selector = SolverSelector::from_name("tabu");
        assert_eq!(selector.strategy(), SolverStrategy::Greedy);
        assert!(selector.solve(&SolveRequest::default()).success);
    }
}
