//! Solver strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::UnknownStrategy;

/// Available solving strategies.
///
/// Only `Greedy` is implemented. The others answer with a
/// not-implemented response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SolverStrategy {
    /// Workload-balanced greedy allocation.
    #[default]
    Greedy,
    /// Sequential solver (placeholder).
    Sequential,
    /// CP-SAT solver (placeholder).
    CpSat,
}

impl SolverStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [SolverStrategy; 3] = [
        SolverStrategy::Greedy,
        SolverStrategy::Sequential,
        SolverStrategy::CpSat,
    ];

    /// Configuration key ("greedy", "sequential", "cpsat").
    pub fn key(&self) -> &'static str {
        match self {
            SolverStrategy::Greedy => "greedy",
            SolverStrategy::Sequential => "sequential",
            SolverStrategy::CpSat => "cpsat",
        }
    }

    /// Label used in responses ("GREEDY", "SEQUENTIAL", "CPSAT").
    pub fn label(&self) -> &'static str {
        match self {
            SolverStrategy::Greedy => "GREEDY",
            SolverStrategy::Sequential => "SEQUENTIAL",
            SolverStrategy::CpSat => "CPSAT",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SolverStrategy::Greedy => "Greedy",
            SolverStrategy::Sequential => "Sequential",
            SolverStrategy::CpSat => "CP-SAT",
        }
    }

    /// Whether the strategy can produce a roster.
    pub fn is_implemented(&self) -> bool {
        matches!(self, SolverStrategy::Greedy)
    }

    /// Strategy to fall back to when this one fails, if any.
    pub fn fallback(&self) -> Option<SolverStrategy> {
        match self {
            SolverStrategy::Greedy | SolverStrategy::CpSat => Some(SolverStrategy::Sequential),
            SolverStrategy::Sequential => None,
        }
    }

    /// Resolves a configured name, case-insensitively.
    ///
    /// Unrecognised names resolve to `Greedy`. This is not an error: a
    /// misconfigured deployment keeps serving with the default strategy.
    pub fn resolve(name: &str) -> Self {
        match name.parse() {
            Ok(strategy) => strategy,
            Err(UnknownStrategy(name)) => {
                warn!(strategy = %name, "Unknown solver strategy, defaulting to greedy");
                SolverStrategy::default()
            }
        }
    }
}

impl FromStr for SolverStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SolverStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.key() == wanted)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for SolverStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("greedy".parse::<SolverStrategy>(), Ok(SolverStrategy::Greedy));
        assert_eq!("SEQUENTIAL".parse::<SolverStrategy>(), Ok(SolverStrategy::Sequential));
        assert_eq!(" CpSat ".parse::<SolverStrategy>(), Ok(SolverStrategy::CpSat));
        assert_eq!(
            "annealing".parse::<SolverStrategy>(),
            Err(UnknownStrategy("annealing".to_string()))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_greedy() {
        assert_eq!(SolverStrategy::resolve("cpsat"), SolverStrategy::CpSat);
        assert_eq!(SolverStrategy::resolve("annealing"), SolverStrategy::Greedy);
        assert_eq!(SolverStrategy::resolve(""), SolverStrategy::Greedy);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SolverStrategy::CpSat.label(), "CPSAT");
        assert_eq!(serde_json::to_value(SolverStrategy::CpSat).unwrap(), "CPSAT");
        assert_eq!(serde_json::to_value(SolverStrategy::Greedy).unwrap(), "GREEDY");
        assert_eq!(SolverStrategy::CpSat.display_name(), "CP-SAT");
        assert_eq!(SolverStrategy::Sequential.to_string(), "sequential");
    }

    #[test]
    fn test_implemented_and_fallback() {
        assert!(SolverStrategy::Greedy.is_implemented());
        assert!(!SolverStrategy::Sequential.is_implemented());
        assert!(!SolverStrategy::CpSat.is_implemented());
        assert_eq!(
            SolverStrategy::Greedy.fallback(),
            Some(SolverStrategy::Sequential)
        );
        assert_eq!(SolverStrategy::Sequential.fallback(), None);
    }
}
